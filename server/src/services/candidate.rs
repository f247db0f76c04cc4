use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unvalidated form payload.
///
/// Every field is kept as raw JSON so that a wrong type is reported as a
/// field error instead of failing deserialization of the whole body. The
/// form's original field names are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionCandidate {
    #[serde(default, alias = "nama_pemohon")]
    pub requester_name: Option<Value>,

    #[serde(default, alias = "pasti")]
    pub organization: Option<Value>,

    #[serde(default, alias = "nama_arwah")]
    pub deceased_names: Option<Value>,

    #[serde(default, alias = "sudah_sumbangan")]
    pub already_contributed: Option<Value>,
}
