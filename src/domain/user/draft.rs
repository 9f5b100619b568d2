/// Candidate record as submitted by a caller, before validation.
///
/// On registration `password` carries the plaintext to be hashed; on a
/// profile update the service overwrites `password` and `role` with the
/// stored values before validating, so those fields never change through
/// that path.
#[derive(Clone, Debug)]
pub struct UserDraft {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}
