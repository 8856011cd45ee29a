mod form_actor;

pub use form_actor::{FormActor, FormSession};
