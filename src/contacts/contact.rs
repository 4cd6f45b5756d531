use serde::{Serialize, Deserialize};

/// A single contact record as exchanged with the backend.
///
/// All wire fields are optional: a freshly created record has nothing
/// but the favorite flag set, and the server omits fields it has no
/// value for. The `id`, `url`, `created_at` and `updated_at` fields
/// are server-owned: they are decoded from responses but never sent
/// back on update or create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing)]
    id:         Option<u64>,

    #[serde(skip_serializing)]
    url:        Option<String>,

    first_name: Option<String>,
    last_name:  Option<String>,
    email:      Option<String>,

    #[serde(rename = "phone_number")]
    phone:      Option<String>,

    profile_pic: Option<String>,
    favorite:   Option<bool>,

    #[serde(skip_serializing)]
    created_at: Option<String>,

    #[serde(skip_serializing)]
    updated_at: Option<String>,
}

impl Contact {
    /// Empty record for the "new contact" flow. The favorite flag
    /// defaults to false since the edit UI has no control for it.
    pub fn new() -> Self {
        Self {
            id:         None,
            url:        None,
            first_name: None,
            last_name:  None,
            email:      None,
            phone:      None,
            profile_pic: None,
            favorite:   Some(false),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn set_id(&mut self, id: u64) {
        self.id = Some(id);
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_url(&mut self, url: &str) {
        self.url = Some(url.to_string());
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn set_first_name(&mut self, name: &str) {
        self.first_name = Some(name.to_string());
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn set_last_name(&mut self, name: &str) {
        self.last_name = Some(name.to_string());
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = Some(email.to_string());
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.phone = Some(phone.to_string());
    }

    pub fn profile_pic(&self) -> Option<&str> {
        self.profile_pic.as_deref()
    }

    pub fn set_profile_pic(&mut self, path: &str) {
        self.profile_pic = Some(path.to_string());
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite.unwrap_or(false)
    }

    pub fn set_favorite(&mut self, favorite: bool) {
        self.favorite = Some(favorite);
    }

    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    /// Canonical resource URL, doubling as the cache key. Empty when
    /// the record has not been persisted yet.
    pub fn key(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    /// Trimmed concatenation of the name parts.
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("");
        let last  = self.last_name.as_deref().unwrap_or("");
        format!("{} {}", first, last).trim().to_string()
    }

    /// Uppercased first character of the full name, used as the
    /// section key. Empty when both name parts are absent.
    pub fn section_key(&self) -> String {
        if self.first_name.is_none() && self.last_name.is_none() {
            return String::new();
        }
        match self.full_name().chars().next() {
            Some(c) => c.to_uppercase().to_string(),
            None => String::new(),
        }
    }

    /// Digits-only extraction of the phone number, suitable for
    /// dialing.
    pub fn phone_digits(&self) -> String {
        self.phone.as_deref().unwrap_or("")
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect()
    }

    /// Whole-field reassignment from another record, used by the
    /// edit-save flow. Records are never partially persisted.
    pub fn copy_from(&mut self, other: &Contact) {
        self.id         = other.id;
        self.url        = other.url.clone();
        self.first_name = other.first_name.clone();
        self.last_name  = other.last_name.clone();
        self.email      = other.email.clone();
        self.phone      = other.phone.clone();
        self.profile_pic = other.profile_pic.clone();
        self.favorite   = other.favorite;
        self.created_at = other.created_at.clone();
        self.updated_at = other.updated_at.clone();
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self::new()
    }
}
