pub mod user;
pub mod session;
pub mod item;
pub mod claim;

/*
 Staff accounts are provisioned with the admin key, then log in with
 email + password. A login mints a session row holding hashed access and
 refresh tokens; the raw tokens only ever live in http-only cookies.
 Items are registered found objects. A claim ties an applicant to an item
 and is completed exactly once, when the item is handed back against a
 signature.
 */
