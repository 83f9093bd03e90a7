//! Core data types for API responses, normalized info records, and node status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Symbolic intent required by a function or callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Intent {
    #[default]
    None,
    Members,
    Presence,
}

impl Intent {
    /// Raw bitmask value the API uses for this intent.
    pub fn raw(self) -> i64 {
        match self {
            Intent::None => RAW_INTENT_NONE,
            Intent::Members => RAW_INTENT_MEMBERS,
            Intent::Presence => RAW_INTENT_PRESENCE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::None => "None",
            Intent::Members => "Members",
            Intent::Presence => "Presence",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const RAW_INTENT_NONE: i64 = 0;
pub const RAW_INTENT_MEMBERS: i64 = 2;
pub const RAW_INTENT_PRESENCE: i64 = 256;

/// Stand-in for intents values that do not fit an `i64`; decodes to `None`.
pub const RAW_INTENT_UNREPRESENTABLE: i64 = -1;

/// Read an intents bitmask from any JSON number.
///
/// `null` reads as no intents and numbers outside `i64` (huge or fractional)
/// read as [`RAW_INTENT_UNREPRESENTABLE`], so a new bitmask never fails a
/// whole response.
fn lenient_intents<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(match number {
        None => RAW_INTENT_NONE,
        Some(n) => n.as_i64().unwrap_or(RAW_INTENT_UNREPRESENTABLE),
    })
}

/// Declared type of an argument.
///
/// Composite labels such as `"Integer | Float"` are single variants. Labels the
/// API introduces later are kept verbatim in [`ArgumentType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArgumentType {
    Bool,
    UrlOrString,
    String,
    Enum,
    Emoji,
    Snowflake,
    Url,
    Integer,
    FloatOrStringOrInteger,
    HowMany,
    Tuple,
    SnowflakeOrString,
    Permission,
    Color,
    Duration,
    IntegerOrFloat,
    StringOrUrl,
    StringOrSnowflake,
    FloatOrBoolOrIntegerOrString,
    FloatOrIntegerOrString,
    StringOrBoolOrIntegerOrFloat,
    HowManyOrString,
    FloatOrInteger,
    Float,
    Other(String),
}

impl ArgumentType {
    /// The label exactly as the API spells it.
    pub fn label(&self) -> &str {
        match self {
            ArgumentType::Bool => "Bool",
            ArgumentType::UrlOrString => "URL | String",
            ArgumentType::String => "String",
            ArgumentType::Enum => "Enum",
            ArgumentType::Emoji => "Emoji",
            ArgumentType::Snowflake => "Snowflake",
            ArgumentType::Url => "URL",
            ArgumentType::Integer => "Integer",
            ArgumentType::FloatOrStringOrInteger => "Float | String | Integer",
            ArgumentType::HowMany => "HowMany",
            ArgumentType::Tuple => "Tuple",
            ArgumentType::SnowflakeOrString => "Snowflake | String",
            ArgumentType::Permission => "Permission",
            ArgumentType::Color => "Color",
            ArgumentType::Duration => "Duration",
            ArgumentType::IntegerOrFloat => "Integer | Float",
            ArgumentType::StringOrUrl => "String | URL",
            ArgumentType::StringOrSnowflake => "String | Snowflake",
            ArgumentType::FloatOrBoolOrIntegerOrString => "Float | Bool | Integer | String",
            ArgumentType::FloatOrIntegerOrString => "Float | Integer | String",
            ArgumentType::StringOrBoolOrIntegerOrFloat => "String | Bool | Integer | Float",
            ArgumentType::HowManyOrString => "HowMany | String",
            ArgumentType::FloatOrInteger => "Float | Integer",
            ArgumentType::Float => "Float",
            ArgumentType::Other(label) => label,
        }
    }
}

impl From<String> for ArgumentType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Bool" => ArgumentType::Bool,
            "URL | String" => ArgumentType::UrlOrString,
            "String" => ArgumentType::String,
            "Enum" => ArgumentType::Enum,
            "Emoji" => ArgumentType::Emoji,
            "Snowflake" => ArgumentType::Snowflake,
            "URL" => ArgumentType::Url,
            "Integer" => ArgumentType::Integer,
            "Float | String | Integer" => ArgumentType::FloatOrStringOrInteger,
            "HowMany" => ArgumentType::HowMany,
            "Tuple" => ArgumentType::Tuple,
            "Snowflake | String" => ArgumentType::SnowflakeOrString,
            "Permission" => ArgumentType::Permission,
            "Color" => ArgumentType::Color,
            "Duration" => ArgumentType::Duration,
            "Integer | Float" => ArgumentType::IntegerOrFloat,
            "String | URL" => ArgumentType::StringOrUrl,
            "String | Snowflake" => ArgumentType::StringOrSnowflake,
            "Float | Bool | Integer | String" => ArgumentType::FloatOrBoolOrIntegerOrString,
            "Float | Integer | String" => ArgumentType::FloatOrIntegerOrString,
            "String | Bool | Integer | Float" => ArgumentType::StringOrBoolOrIntegerOrFloat,
            "HowMany | String" => ArgumentType::HowManyOrString,
            "Float | Integer" => ArgumentType::FloatOrInteger,
            "Float" => ArgumentType::Float,
            _ => ArgumentType::Other(label),
        }
    }
}

impl From<ArgumentType> for String {
    fn from(kind: ArgumentType) -> Self {
        match kind {
            ArgumentType::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single argument of a function or callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: ArgumentType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeatable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty: Option<bool>,
    /// Accepted literals, in API order. Which set applies depends on the
    /// argument's role, so the values stay untyped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_data: Option<Vec<String>>,
}

/// Function as returned by `function/{tag}` and `function_list`.
///
/// The unused `longDescription` and deprecated `color` keys are skipped
/// whatever their type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub tag: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub arguments: Option<Vec<Argument>>,
    #[serde(default, deserialize_with = "lenient_intents")]
    pub intents: i64,
    #[serde(default)]
    pub premium: bool,
}

/// Callback as returned by `callback/{tag}` and `callback_list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackResponse {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub arguments: Option<Vec<Argument>>,
    #[serde(default, deserialize_with = "lenient_intents")]
    pub intents: i64,
    #[serde(default)]
    pub is_premium: bool,
}

/// A raw response of either family.
#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    Function(FunctionResponse),
    Callback(CallbackResponse),
}

/// Normalized function information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub tag: String,
    pub description: String,
    /// `None` when the API sent `null`, which is distinct from an empty list.
    pub args: Option<Vec<Argument>>,
    pub intents: Intent,
    /// Whether the function requires premium hosting time.
    pub premium: bool,
}

/// Normalized callback information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackInfo {
    pub name: String,
    pub description: String,
    pub args: Option<Vec<Argument>>,
    pub intents: Intent,
    pub premium: bool,
}

/// Normalized information of either family.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Info {
    Function(FunctionInfo),
    Callback(CallbackInfo),
}

impl From<FunctionInfo> for Info {
    fn from(info: FunctionInfo) -> Self {
        Info::Function(info)
    }
}

impl From<CallbackInfo> for Info {
    fn from(info: CallbackInfo) -> Self {
        Info::Callback(info)
    }
}

impl Info {
    /// Tag of a function or name of a callback.
    pub fn tag(&self) -> &str {
        match self {
            Info::Function(info) => &info.tag,
            Info::Callback(info) => &info.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Info::Function(info) => &info.description,
            Info::Callback(info) => &info.description,
        }
    }

    pub fn args(&self) -> Option<&[Argument]> {
        match self {
            Info::Function(info) => info.args.as_deref(),
            Info::Callback(info) => info.args.as_deref(),
        }
    }

    pub fn intents(&self) -> Intent {
        match self {
            Info::Function(info) => info.intents,
            Info::Callback(info) => info.intents,
        }
    }

    pub fn premium(&self) -> bool {
        match self {
            Info::Function(info) => info.premium,
            Info::Callback(info) => info.premium,
        }
    }
}

/// Scraped statistics for a single node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStats {
    pub node_id: String,
    /// The stats rendered as a single line.
    pub text: String,
    pub raw_stats: RawNodeStats,
}

/// Cell values of a status row, as scraped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNodeStats {
    pub bot_count: String,
    pub ping: String,
    pub status: String,
}

/// One status table: the default or the high performance nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTier {
    pub name: String,
    pub stats: Vec<NodeStats>,
}
