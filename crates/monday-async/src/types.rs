//! Enumerations used as query arguments.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board events a webhook can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookEventType {
    ChangeColumnValue,
    ChangeStatusColumnValue,
    ChangeSubitemColumnValue,
    ChangeSpecificColumnValue,
    ChangeName,
    CreateItem,
    ItemArchived,
    ItemDeleted,
    ItemMovedToAnyGroup,
    ItemMovedToSpecificGroup,
    ItemRestored,
    CreateSubitem,
    ChangeSubitemName,
    MoveSubitem,
    SubitemArchived,
    SubitemDeleted,
    CreateColumn,
    CreateUpdate,
    EditUpdate,
    DeleteUpdate,
    CreateSubitemUpdate,
}

impl WebhookEventType {
    /// All event types.
    pub const ALL: [Self; 21] = [
        Self::ChangeColumnValue,
        Self::ChangeStatusColumnValue,
        Self::ChangeSubitemColumnValue,
        Self::ChangeSpecificColumnValue,
        Self::ChangeName,
        Self::CreateItem,
        Self::ItemArchived,
        Self::ItemDeleted,
        Self::ItemMovedToAnyGroup,
        Self::ItemMovedToSpecificGroup,
        Self::ItemRestored,
        Self::CreateSubitem,
        Self::ChangeSubitemName,
        Self::MoveSubitem,
        Self::SubitemArchived,
        Self::SubitemDeleted,
        Self::CreateColumn,
        Self::CreateUpdate,
        Self::EditUpdate,
        Self::DeleteUpdate,
        Self::CreateSubitemUpdate,
    ];

    /// The wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ChangeColumnValue => "change_column_value",
            Self::ChangeStatusColumnValue => "change_status_column_value",
            Self::ChangeSubitemColumnValue => "change_subitem_column_value",
            Self::ChangeSpecificColumnValue => "change_specific_column_value",
            Self::ChangeName => "change_name",
            Self::CreateItem => "create_item",
            Self::ItemArchived => "item_archived",
            Self::ItemDeleted => "item_deleted",
            Self::ItemMovedToAnyGroup => "item_moved_to_any_group",
            Self::ItemMovedToSpecificGroup => "item_moved_to_specific_group",
            Self::ItemRestored => "item_restored",
            Self::CreateSubitem => "create_subitem",
            Self::ChangeSubitemName => "change_subitem_name",
            Self::MoveSubitem => "move_subitem",
            Self::SubitemArchived => "subitem_archived",
            Self::SubitemDeleted => "subitem_deleted",
            Self::CreateColumn => "create_column",
            Self::CreateUpdate => "create_update",
            Self::EditUpdate => "edit_update",
            Self::DeleteUpdate => "delete_update",
            Self::CreateSubitemUpdate => "create_subitem_update",
        }
    }
}

/// What a notification points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
    /// An update or reply.
    Post,
    /// An item or board.
    Project,
}

impl TargetType {
    /// The wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "Post",
            Self::Project => "Project",
        }
    }
}

/// Which users a users query returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserKind {
    #[default]
    All,
    NonGuests,
    Guests,
    NonPending,
}

impl UserKind {
    /// The wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::NonGuests => "non_guests",
            Self::Guests => "guests",
            Self::NonPending => "non_pending",
        }
    }
}

/// Declare a fieldless enum with explicit wire values.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant),+
        }

        impl $name {
            /// All values.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The wire value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }
    };
}

wire_enum! {
    /// Column types accepted when creating or filtering columns.
    ColumnType {
        AutoNumber => "auto_number",
        Checkbox => "checkbox",
        Country => "country",
        ColorPicker => "color_picker",
        CreationLog => "creation_log",
        Date => "date",
        Dependency => "dependency",
        Dropdown => "dropdown",
        Email => "email",
        File => "file",
        Hour => "hour",
        ItemId => "item_id",
        LastUpdated => "last_updated",
        Link => "link",
        Location => "location",
        LongText => "long_text",
        Numbers => "numbers",
        People => "people",
        Phone => "phone",
        Progress => "progress",
        Rating => "rating",
        Status => "status",
        Team => "team",
        Tags => "tags",
        Text => "text",
        Timeline => "timeline",
        TimeTracking => "time_tracking",
        Vote => "vote",
        Week => "week",
        WorldClock => "world_clock",
    }
}

wire_enum! {
    /// Group attributes that `update_group` can change.
    GroupAttributes {
        Title => "title",
        Color => "color",
        /// Move the group after the group whose ID is the new value.
        RelativePositionAfter => "relative_position_after",
        /// Move the group before the group whose ID is the new value.
        RelativePositionBefore => "relative_position_before",
    }
}

wire_enum! {
    /// Where a new group goes relative to another group.
    PositionRelative {
        BeforeAt => "before_at",
        AfterAt => "after_at",
    }
}

wire_enum! {
    /// Colors for a new group, as hex values.
    GroupColors {
        DarkGreen => "#037f4c",
        Orange => "#fdab3d",
        Blue => "#579bfc",
        Red => "#e2445c",
        Green => "#00c875",
        Grey => "#c4c4c4",
        TrolleyGrey => "#808080",
        DarkBlue => "#0086c0",
        LimeGreen => "#9cd326",
        Yellow => "#ffcb00",
        Purple => "#a25ddc",
        DarkPurple => "#784bd1",
        Brown => "#7f5347",
        DarkRed => "#bb3354",
        DarkOrange => "#ff642e",
        DarkPink => "#ff158a",
        Turquoise => "#66ccff",
        LightPink => "#ff5ac4",
    }
}

wire_enum! {
    /// Color names accepted by `update_group` for [`GroupAttributes::Color`].
    GroupUpdateColors {
        DarkGreen => "dark-green",
        Orange => "orange",
        Blue => "blue",
        Red => "red",
        Green => "green",
        Grey => "grey",
        DarkBlue => "dark-blue",
        Yellow => "yellow",
        LimeGreen => "lime-green",
        Purple => "purple",
        DarkPurple => "dark_purple",
        Brown => "brown",
        DarkRed => "dark-red",
        TrolleyGrey => "trolley-grey",
        DarkOrange => "dark-orange",
        DarkPink => "dark-pink",
        Turquoise => "turquoise",
        LightPink => "light-pink",
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    WebhookEventType,
    TargetType,
    UserKind,
    ColumnType,
    GroupAttributes,
    PositionRelative,
    GroupColors,
    GroupUpdateColors
);
