//! Data carried between screens: the signup draft, the submitted user,
//! articles and the selectable region list.

/// Which field of a [`UserDraft`] a signup step fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Username,
    Password,
    Region,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::Region => "region",
        }
    }
}

/// Partially filled signup record.
///
/// Lives only as long as the signup flow that owns it. Nothing here is
/// persisted; the draft is dropped when the flow completes or is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDraft {
    pub username: Option<String>,
    pub password: Option<String>,
    pub region: Option<String>,
}

impl UserDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` into the given field, replacing any previous value.
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Username => self.username = Some(value),
            DraftField::Password => self.password = Some(value),
            DraftField::Region => self.region = Some(value),
        }
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        match field {
            DraftField::Username => self.username.as_deref(),
            DraftField::Password => self.password.as_deref(),
            DraftField::Region => self.region.as_deref(),
        }
    }

    /// True when no field has been filled in yet.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none() && self.region.is_none()
    }

    /// Consume the draft into a submitted record.
    ///
    /// Fails with the first field that is still missing.
    pub fn into_user(self) -> Result<User, DraftField> {
        Ok(User {
            username: self.username.ok_or(DraftField::Username)?,
            password: self.password.ok_or(DraftField::Password)?,
            region: self.region.ok_or(DraftField::Region)?,
        })
    }
}

/// A completed signup, as submitted at the end of the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
    pub region: String,
}

/// Article shown in the content list and forwarded to the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: String,
}

impl Article {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Regions offered by the signup picker.
pub const DEFAULT_REGIONS: &[&str] = &[
    "North America",
    "South America",
    "Europe",
    "Asia",
    "Africa",
    "Australia",
];

/// Fixed, ordered list of regions the region step may choose from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionList {
    regions: Vec<String>,
}

impl RegionList {
    /// Build a list from region names in picker order.
    ///
    /// The list must not be empty: the region step can only complete by
    /// picking one of these names. `Config::validate` enforces this for
    /// configured lists.
    pub fn new<I, S>(regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let regions: Vec<String> = regions.into_iter().map(Into::into).collect();
        debug_assert!(!regions.is_empty(), "region list must not be empty");
        Self { regions }
    }

    /// Region at picker row `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.regions.get(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.regions.iter().any(|r| r == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.regions.iter().position(|r| r == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for RegionList {
    fn default() -> Self {
        Self::new(DEFAULT_REGIONS.iter().copied())
    }
}
