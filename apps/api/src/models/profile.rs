use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// The student side of a recommendation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub education: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub sector: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
}
