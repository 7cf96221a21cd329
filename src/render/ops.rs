//! Typed view of structured-content operations.
//!
//! Each raw operation is classified exactly once, by the shape of its
//! `insert` field, into an [`Insert`] variant. Handlers then work with typed
//! payloads instead of probing JSON.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::trace;

use crate::error::{RenderError, Result};

/// `backup_text` value that marks a lottery entry instead of a fold.
pub const LOTTERY_MARKER: &str = "[抽奖]";

/// Style attributes attached to an operation.
///
/// Attributes are advisory: values of an unexpected type are ignored rather
/// than failing the operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
  pub bold: bool,
  pub color: Option<String>,
  pub link: Option<String>,
  pub width: Option<u64>,
  pub height: Option<u64>,
}

impl Attributes {
  fn from_value(value: Option<&Value>) -> Self {
    let Some(Value::Object(fields)) = value else {
      return Self::default();
    };

    let text = |key: &str| fields.get(key).and_then(Value::as_str).map(str::to_string);

    Self {
      bold: fields.get("bold").and_then(Value::as_bool).unwrap_or(false),
      color: text("color"),
      link: text("link"),
      width: fields.get("width").and_then(number_from_value),
      height: fields.get("height").and_then(number_from_value),
    }
  }
}

/// Hosted video payload (`insert.vod`).
#[derive(Debug, Clone, Deserialize)]
pub struct Vod {
  #[serde(default)]
  pub cover: Option<String>,
  pub resolutions: Vec<Resolution>,
}

/// One transcoded rendition of a hosted video.
#[derive(Debug, Clone, Deserialize)]
pub struct Resolution {
  pub url: String,
  #[serde(default)]
  pub format: String,
  /// File size in bytes.
  #[serde(default, deserialize_with = "lenient_u64")]
  pub size: Option<u64>,
  /// Tier label such as `"1080P"`.
  #[serde(default)]
  pub definition: String,
  #[serde(default, deserialize_with = "lenient_u64")]
  pub width: Option<u64>,
  #[serde(default, deserialize_with = "lenient_u64")]
  pub height: Option<u64>,
}

/// User mention payload (`insert.mention`).
#[derive(Debug, Clone, Deserialize)]
pub struct Mention {
  #[serde(deserialize_with = "lenient_string")]
  pub uid: String,
  pub nickname: String,
}

/// Rich link card payload (`insert.link_card`).
#[derive(Debug, Clone, Deserialize)]
pub struct LinkCard {
  #[serde(default)]
  pub cover: String,
  #[serde(default)]
  pub title: String,
  #[serde(default, deserialize_with = "lenient_opt_string")]
  pub price: Option<String>,
  #[serde(default)]
  pub button_text: Option<String>,
  pub origin_url: String,
}

/// Collapsible section payload (`insert.fold`).
///
/// Both fields are JSON-encoded operation lists.
#[derive(Debug, Clone, Deserialize)]
pub struct Fold {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub content: String,
}

/// Lottery entry payload (`insert.lottery`).
#[derive(Debug, Clone, Deserialize)]
pub struct Lottery {
  #[serde(deserialize_with = "lenient_string")]
  pub id: String,
  #[serde(default)]
  pub toast: String,
}

/// The recognized shapes of an operation's `insert`.
#[derive(Debug, Clone)]
pub enum Insert {
  Text(String),
  Image(String),
  HostedVideo(Vod),
  EmbeddedVideo(String),
  Lottery(Lottery),
  Fold(Fold),
  LinkCard(LinkCard),
  /// Divider style tag; unrecognized tags are kept as-is.
  Divider(String),
  Mention(Mention),
  Unknown,
}

impl Insert {
  /// Name of the variant, matching the upstream key where there is one.
  pub fn name(&self) -> &'static str {
    match self {
      Insert::Text(_) => "text",
      Insert::Image(_) => "image",
      Insert::HostedVideo(_) => "vod",
      Insert::EmbeddedVideo(_) => "video",
      Insert::Lottery(_) => "lottery",
      Insert::Fold(_) => "fold",
      Insert::LinkCard(_) => "link_card",
      Insert::Divider(_) => "divider",
      Insert::Mention(_) => "mention",
      Insert::Unknown => "unknown",
    }
  }
}

/// A classified operation that still borrows its raw JSON for diagnostics.
#[derive(Debug, Clone)]
pub struct Operation<'a> {
  pub insert: Insert,
  pub attributes: Attributes,
  pub raw: &'a Value,
}

impl<'a> Operation<'a> {
  /// Classify a raw operation.
  ///
  /// Shapes are checked in a fixed priority order: string, `image`,
  /// `vod`, `video`, `backup_text`, `link_card`, `divider`, `mention`.
  /// Anything else becomes [`Insert::Unknown`].
  ///
  /// # Errors
  /// Returns [`RenderError::ContractViolation`] when the matched key's payload
  /// does not have the expected structure.
  pub fn parse(raw: &'a Value) -> Result<Self> {
    let insert = classify_insert(raw.get("insert"))?;
    trace!("Classified operation as {}", insert.name());

    Ok(Self {
      insert,
      attributes: Attributes::from_value(raw.get("attributes")),
      raw,
    })
  }
}

fn classify_insert(insert: Option<&Value>) -> Result<Insert> {
  let fields = match insert {
    Some(Value::String(text)) => return Ok(Insert::Text(text.clone())),
    Some(Value::Object(fields)) => fields,
    _ => return Ok(Insert::Unknown),
  };

  if let Some(image) = fields.get("image") {
    return payload("image", image).map(Insert::Image);
  }
  if let Some(vod) = fields.get("vod") {
    return payload("vod", vod).map(Insert::HostedVideo);
  }
  if let Some(video) = fields.get("video") {
    return payload("video", video).map(Insert::EmbeddedVideo);
  }
  // A backup text without its payload is some other embed; keep looking.
  if let Some(tag) = fields.get("backup_text") {
    if tag.as_str() == Some(LOTTERY_MARKER) {
      if let Some(lottery) = fields.get("lottery") {
        return payload("lottery", lottery).map(Insert::Lottery);
      }
    } else if let Some(fold) = fields.get("fold") {
      return payload("fold", fold).map(Insert::Fold);
    }
  }
  if let Some(card) = fields.get("link_card") {
    return payload("link_card", card).map(Insert::LinkCard);
  }
  if let Some(divider) = fields.get("divider") {
    let tag = divider.as_str().map(str::to_string).unwrap_or_else(|| divider.to_string());
    return Ok(Insert::Divider(tag));
  }
  if let Some(mention) = fields.get("mention") {
    return payload("mention", mention).map(Insert::Mention);
  }

  Ok(Insert::Unknown)
}

fn payload<T: DeserializeOwned>(variant: &'static str, value: &Value) -> Result<T> {
  T::deserialize(value).map_err(|e| RenderError::contract(variant, e.to_string()))
}

/// Reads a non-negative integer from a JSON number or numeric string.
pub(crate) fn number_from_value(value: &Value) -> Option<u64> {
  match value {
    Value::Number(number) => number
      .as_u64()
      .or_else(|| number.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
    Value::String(text) => text.trim().parse().ok(),
    _ => None,
  }
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<u64>, D::Error> {
  let value = Option::<Value>::deserialize(deserializer)?;
  Ok(value.as_ref().and_then(number_from_value))
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
  match Value::deserialize(deserializer)? {
    Value::String(text) => Ok(text),
    Value::Number(number) => Ok(number.to_string()),
    other => Err(D::Error::custom(format!("expected a string or number, found {other}"))),
  }
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<String>, D::Error> {
  match Option::<Value>::deserialize(deserializer)? {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(text)) => Ok(Some(text)),
    Some(Value::Number(number)) => Ok(Some(number.to_string())),
    Some(other) => Err(D::Error::custom(format!("expected a string or number, found {other}"))),
  }
}
