use sea_orm::{ConnectionTrait, Statement};

#[inline(always)]
pub fn statement<C, S>(conn: &C, query: S) -> Statement
where
    C: ConnectionTrait,
    S: Into<String>,
{
    Statement::from_string(conn.get_database_backend(), query.into())
}
