//! Resource handles grouping the client's calls.
//!
//! Handles borrow the [`MondayClient`](crate::MondayClient) and are created
//! by its accessor methods, e.g. `client.users()`. Every call builds its
//! query, sends it, and returns the raw JSON response.

macro_rules! resource {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            client: &'a $crate::MondayClient,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(client: &'a $crate::MondayClient) -> Self {
                Self { client }
            }
        }
    };
}

mod account;
mod api;
mod assets;
mod columns;
mod complexity;
mod custom;
mod groups;
mod notifications;
mod updates;
mod users;
mod webhooks;

pub use account::AccountResource;
pub use api::ApiResource;
pub use assets::AssetsResource;
pub use columns::ColumnsResource;
pub use complexity::ComplexityResource;
pub use custom::CustomResource;
pub use groups::GroupsResource;
pub use notifications::NotificationsResource;
pub use updates::UpdatesResource;
pub use users::UsersResource;
pub use webhooks::WebhooksResource;
