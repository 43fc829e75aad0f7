use super::const_error;

const_error!(INTERNAL, INTERNAL_SERVER_ERROR, 0, "internal server error");
const_error!(DATABASE_ERROR, INTERNAL_SERVER_ERROR, 1, "database error");
const_error!(
    INVALID_PARTICIPANT_ID,
    BAD_REQUEST,
    2,
    "invalid participant id"
);
