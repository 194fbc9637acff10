//! Submitted forms and their field-level validation.
//!
//! Text inputs are trimmed before validation and a whitespace-only value
//! counts as missing. Password inputs are taken verbatim.

use std::borrow::Cow;

use bytes::Bytes;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use vidio_core::error::{AppError, FieldErrors, field_errors_from};
use vidio_core::result::AppResult;
use vidio_entity::audio::{MAX_TITLE_CHARS, MAX_VILLAGE_CHARS};

/// Message for a missing required input.
pub const REQUIRED: &str = "This field is required.";

const MAX_USERNAME_CHARS: usize = 150;
const MAX_NAME_CHARS: u64 = 100;
const MAX_FILE_NAME_CHARS: usize = 100;

/// Registration form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterForm {
    /// Desired username.
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    /// Email address.
    #[validate(custom(function = "validate_email_field"))]
    pub email: String,
    /// Given name.
    #[validate(
        custom(function = "required"),
        length(max = MAX_NAME_CHARS, message = "Ensure this value has at most 100 characters.")
    )]
    pub first_name: String,
    /// Family name.
    #[validate(
        custom(function = "required"),
        length(max = MAX_NAME_CHARS, message = "Ensure this value has at most 100 characters.")
    )]
    pub last_name: String,
    /// Password.
    #[validate(custom(function = "required"))]
    pub password1: String,
    /// Password confirmation.
    #[validate(
        custom(function = "required"),
        must_match(other = "password1", message = "The two password fields didn't match.")
    )]
    pub password2: String,
    /// Ask for staff rights. Only granted to allowlisted names.
    #[serde(deserialize_with = "checkbox")]
    pub is_admin: bool,
}

impl RegisterForm {
    /// Trim the text inputs.
    pub fn normalized(mut self) -> Self {
        trim_in_place(&mut self.username);
        trim_in_place(&mut self.email);
        trim_in_place(&mut self.first_name);
        trim_in_place(&mut self.last_name);
        self
    }
}

/// Login form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginForm {
    /// Username.
    #[validate(custom(function = "required"))]
    pub username: String,
    /// Password.
    #[validate(custom(function = "required"))]
    pub password: String,
    /// Issue a long-lived token.
    #[serde(deserialize_with = "checkbox")]
    pub remember_me: bool,
}

/// Profile edit form: account fields, the biography, and optionally a new
/// profile picture.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ProfileForm {
    /// New username.
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    /// New email address.
    #[validate(custom(function = "validate_email_field"))]
    pub email: String,
    /// New biography. May be empty.
    pub bio: String,
    /// Replacement profile picture, only sent with multipart bodies.
    #[serde(skip)]
    pub avatar: Option<UploadedFile>,
}

impl ProfileForm {
    /// Trim the text inputs.
    pub fn normalized(mut self) -> Self {
        trim_in_place(&mut self.username);
        trim_in_place(&mut self.email);
        trim_in_place(&mut self.bio);
        self
    }

    /// Validate the text fields and, when present, the picture against `max_upload_bytes`.
    pub fn check(&self, max_upload_bytes: u64) -> AppResult<()> {
        let mut errors = FormErrors::from_validation(self.validate());
        if let Some(file) = &self.avatar {
            if file.data.is_empty() {
                errors.add("avatar", "The submitted file is empty.");
            } else if file.data.len() as u64 > max_upload_bytes {
                errors.add(
                    "avatar",
                    format!("File exceeds maximum upload size of {max_upload_bytes} bytes."),
                );
            } else if !looks_like_image(&file.data) {
                errors.add("avatar", INVALID_IMAGE);
            }
            let name_chars = file.file_name.chars().count();
            if name_chars > MAX_FILE_NAME_CHARS {
                errors.add(
                    "avatar",
                    format!(
                        "Ensure this filename has at most {MAX_FILE_NAME_CHARS} characters (it has {name_chars})."
                    ),
                );
            }
        }
        errors.into_result()
    }
}

/// Rejection for a picture that is not a JPEG, PNG, GIF, or WebP image.
pub const INVALID_IMAGE: &str =
    "Upload a valid image. The file you uploaded was either not an image or a corrupted image.";

/// Sniff the leading magic bytes of the image formats browsers display.
fn looks_like_image(data: &[u8]) -> bool {
    data.starts_with(&[0xFF, 0xD8, 0xFF])
        || data.starts_with(b"\x89PNG\r\n\x1a\n")
        || data.starts_with(b"GIF87a")
        || data.starts_with(b"GIF89a")
        || (data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP")
}

/// An uploaded file part.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied file name.
    pub file_name: String,
    /// File content.
    pub data: Bytes,
}

/// Audio upload form, assembled from a multipart body.
#[derive(Debug, Clone, Default, Validate)]
pub struct UploadForm {
    /// Title.
    #[validate(
        custom(function = "required"),
        length(max = MAX_TITLE_CHARS, message = "Ensure this value has at most 100 characters.")
    )]
    pub title: String,
    /// Description.
    #[validate(custom(function = "required"))]
    pub description: String,
    /// Village. Blank means none.
    #[validate(length(
        max = MAX_VILLAGE_CHARS,
        message = "Ensure this value has at most 100 characters."
    ))]
    pub village: Option<String>,
    /// The audio payload.
    pub file: Option<UploadedFile>,
}

impl UploadForm {
    /// Trim the text inputs and turn a blank village into `None`.
    pub fn normalized(mut self) -> Self {
        trim_in_place(&mut self.title);
        trim_in_place(&mut self.description);
        self.village = self
            .village
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        self
    }

    /// Validate every field, including the payload against `max_upload_bytes`.
    pub fn check(&self, max_upload_bytes: u64) -> AppResult<()> {
        let mut errors = FormErrors::from_validation(self.validate());
        match &self.file {
            None => errors.add("audio", REQUIRED),
            Some(file) => {
                let name_chars = file.file_name.chars().count();
                if file.file_name.trim().is_empty() {
                    errors.add("audio", "No file was submitted.");
                } else if name_chars > MAX_FILE_NAME_CHARS {
                    errors.add(
                        "audio",
                        format!(
                            "Ensure this filename has at most {MAX_FILE_NAME_CHARS} characters (it has {name_chars})."
                        ),
                    );
                }
                if file.data.is_empty() {
                    errors.add("audio", "The submitted file is empty.");
                } else if file.data.len() as u64 > max_upload_bytes {
                    errors.add(
                        "audio",
                        format!("File exceeds maximum upload size of {max_upload_bytes} bytes."),
                    );
                }
            }
        }
        errors.into_result()
    }
}

/// Accumulates field errors from several checks before failing.
#[derive(Debug, Default)]
pub struct FormErrors(FieldErrors);

impl FormErrors {
    /// Start from the outcome of a `validator` run.
    pub fn from_validation(result: Result<(), ValidationErrors>) -> Self {
        match result {
            Ok(()) => Self::default(),
            Err(errors) => Self(field_errors_from(&errors)),
        }
    }

    /// Record a message against `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Whether `field` already failed.
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Whether nothing failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok` if nothing failed, otherwise a validation error carrying every message.
    pub fn into_result(self) -> AppResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AppError::invalid_fields(self.0))
        }
    }
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(error("required", REQUIRED))
    } else {
        Ok(())
    }
}

fn validate_username(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    let chars = value.chars().count();
    if chars > MAX_USERNAME_CHARS {
        return Err(error(
            "max_length",
            format!("Ensure this value has at most {MAX_USERNAME_CHARS} characters (it has {chars})."),
        ));
    }
    if !value
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        return Err(error(
            "invalid",
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
        ));
    }
    Ok(())
}

fn validate_email_field(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    if value.validate_email() {
        Ok(())
    } else {
        Err(error("email", "Enter a valid email address."))
    }
}

/// HTML checkboxes submit `on` when ticked and nothing otherwise.
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "on" | "true" | "1" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register() -> RegisterForm {
        RegisterForm {
            username: "ada".into(),
            email: "ada@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            password1: "Wq8#zLp2!vRt9$".into(),
            password2: "Wq8#zLp2!vRt9$".into(),
            is_admin: false,
        }
    }

    fn fields(err: AppError) -> FieldErrors {
        err.field_errors().unwrap()
    }

    #[test]
    fn test_valid_register_form() {
        assert!(register().validate().is_ok());
    }

    #[test]
    fn test_register_missing_and_mismatched_fields() {
        let form = RegisterForm {
            first_name: "   ".into(),
            password2: "different".into(),
            ..register()
        }
        .normalized();
        let errs = fields(form.validate().unwrap_err().into());
        assert_eq!(errs["first_name"], vec![REQUIRED.to_string()]);
        assert_eq!(
            errs["password2"],
            vec!["The two password fields didn't match.".to_string()]
        );
        assert!(!errs.contains_key("username"));
    }

    #[test]
    fn test_username_rules() {
        assert!(validate_username("a.b+c-d_e@f").is_ok());
        assert!(validate_username("has space").is_err());
        assert!(validate_username(&"x".repeat(150)).is_ok());
        assert!(validate_username(&"x".repeat(151)).is_err());
        assert!(validate_username("").is_err());
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email_field("ada@example.com").is_ok());
        assert!(validate_email_field("not-an-email").is_err());
        let err = validate_email_field("").unwrap_err();
        assert_eq!(err.code, "required");
    }

    #[test]
    fn test_checkbox_values() {
        #[derive(Deserialize)]
        struct Flag {
            #[serde(default, deserialize_with = "checkbox")]
            flag: bool,
        }
        let on: Flag = serde_json::from_str(r#"{"flag":"on"}"#).unwrap();
        let off: Flag = serde_json::from_str(r#"{"flag":"off"}"#).unwrap();
        let missing: Flag = serde_json::from_str("{}").unwrap();
        assert!(on.flag);
        assert!(!off.flag);
        assert!(!missing.flag);
    }

    fn upload(title: &str, data: &'static [u8]) -> UploadForm {
        UploadForm {
            title: title.into(),
            description: "dawn chorus".into(),
            village: Some("  ".into()),
            file: Some(UploadedFile {
                file_name: "dawn.mp3".into(),
                data: Bytes::from_static(data),
            }),
        }
        .normalized()
    }

    fn profile(avatar: Option<&'static [u8]>) -> ProfileForm {
        ProfileForm {
            username: "ada".into(),
            email: "ada@example.com".into(),
            bio: String::new(),
            avatar: avatar.map(|data| UploadedFile {
                file_name: "me.png".into(),
                data: Bytes::from_static(data),
            }),
        }
    }

    #[test]
    fn test_profile_avatar_checks() {
        assert!(profile(None).check(1024).is_ok());
        assert!(profile(Some(&b"\x89PNG\r\n\x1a\n...."[..])).check(1024).is_ok());
        assert!(profile(Some(&b"\xFF\xD8\xFF\xE0"[..])).check(1024).is_ok());
        assert!(profile(Some(&b"RIFF\x10\0\0\0WEBPVP8 "[..])).check(1024).is_ok());

        let errs = fields(profile(Some(&b"ID3\x04"[..])).check(1024).unwrap_err());
        assert_eq!(errs["avatar"], vec![INVALID_IMAGE.to_string()]);

        let errs = fields(profile(Some(&b""[..])).check(1024).unwrap_err());
        assert_eq!(errs["avatar"], vec!["The submitted file is empty.".to_string()]);

        let errs = fields(profile(Some(&b"GIF89a0123"[..])).check(4).unwrap_err());
        assert!(errs["avatar"][0].contains("maximum upload size"));
    }

    #[test]
    fn test_upload_blank_village_becomes_none() {
        let form = upload("Dawn", b"ID3");
        assert_eq!(form.village, None);
        assert!(form.check(1024).is_ok());
    }

    #[test]
    fn test_upload_title_limits() {
        assert!(upload(&"t".repeat(100), b"ID3").check(1024).is_ok());

        let errs = fields(upload(&"t".repeat(101), b"ID3").check(1024).unwrap_err());
        assert!(errs.contains_key("title"));

        let errs = fields(upload("   ", b"ID3").check(1024).unwrap_err());
        assert_eq!(errs["title"], vec![REQUIRED.to_string()]);
    }

    #[test]
    fn test_upload_file_checks() {
        let errs = fields(upload("Dawn", b"").check(1024).unwrap_err());
        assert_eq!(errs["audio"], vec!["The submitted file is empty.".to_string()]);

        let errs = fields(upload("Dawn", b"0123456789").check(4).unwrap_err());
        assert!(errs["audio"][0].contains("maximum upload size"));

        let mut form = upload("Dawn", b"ID3");
        form.file = None;
        let errs = fields(form.check(1024).unwrap_err());
        assert_eq!(errs["audio"], vec![REQUIRED.to_string()]);

        let mut form = upload("Dawn", b"ID3");
        if let Some(file) = form.file.as_mut() {
            file.file_name = format!("{}.mp3", "n".repeat(97));
        }
        let errs = fields(form.check(1024).unwrap_err());
        assert!(errs["audio"][0].contains("at most 100 characters (it has 101)"));
    }
}
