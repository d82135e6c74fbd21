use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Fields a create request must carry, in the order they are checked.
pub const REQUIRED_PROJECT_FIELDS: [&str; 7] = [
    "title",
    "description",
    "image_path",
    "project_type",
    "year",
    "status",
    "tech_stack",
];

/// Tried after the configured resume file name.
pub const FALLBACK_RESUME_FILE: &str = "resume.pdf";

pub const RESUME_DIR: &str = "resume";

/// Routed page paths and the file each one serves from the site root.
pub const PAGES: [(&str, &str); 7] = [
    ("/", "index.html"),
    ("/about", "about.html"),
    ("/projects", "projects.html"),
    ("/contact", "contact.html"),
    ("/resume", "resume.html"),
    ("/thankyou", "thankyou.html"),
    ("/admin", "admin.html"),
];
