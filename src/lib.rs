pub mod core;
pub mod contacts;

pub use crate::core::{
    error::{self, Error},
    config,
    logger,
    default_configuration as configuration,
};

pub use crate::contacts::{
    Contact,
    ContactInput,
    ApiClient,
    ContactsApi,
    PageController,
};
