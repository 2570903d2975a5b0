use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Weapon name used when a kill event does not say which weapon was used.
pub const UNKNOWN_WEAPON: &str = "unknown";

/// A `player_death` record as emitted by the replay decoder.
///
/// Every field is optional. Fields with an unexpected scalar kind decode to
/// `None` instead of failing the whole document.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct KillEvent {
    #[serde(default, deserialize_with = "identity")]
    pub attacker_name: Option<String>,
    #[serde(default, deserialize_with = "identity")]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "identity")]
    pub weapon: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub headshot: bool,
    #[serde(default, deserialize_with = "number")]
    pub attacker_x: Option<f64>,
    #[serde(default, deserialize_with = "number")]
    pub attacker_y: Option<f64>,
}

impl KillEvent {
    /// The weapon identifier, falling back to [`UNKNOWN_WEAPON`].
    pub fn weapon_or_unknown(&self) -> &str {
        self.weapon.as_deref().unwrap_or(UNKNOWN_WEAPON)
    }

    /// The attacker position, only when both coordinates are present.
    pub fn attacker_position(&self) -> Option<(f64, f64)> {
        Some((self.attacker_x?, self.attacker_y?))
    }
}

/// A `player_hurt` record.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct HurtEvent {
    #[serde(default, deserialize_with = "identity")]
    pub attacker_name: Option<String>,
    #[serde(default, deserialize_with = "number")]
    pub dmg_health: Option<f64>,
}

/// A `weapon_fire` record.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct FireEvent {
    #[serde(default, deserialize_with = "identity")]
    pub user_name: Option<String>,
}

/// The three event sequences of one decoded replay.
///
/// A sequence missing from the document, or set to `null`, is `None`.
#[derive(Deserialize, Debug, Default)]
pub struct ReplayEvents {
    #[serde(default, rename = "player_death")]
    pub kills: Option<Vec<KillEvent>>,
    #[serde(default, rename = "player_hurt")]
    pub hurts: Option<Vec<HurtEvent>>,
    #[serde(default, rename = "weapon_fire")]
    pub shots: Option<Vec<FireEvent>>,
}

/// Decodes a player identity. Empty strings and zero count as absent; other numbers are kept as their text.
fn identity<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    })
}

/// Decodes a finite number. `NaN` and infinities, even when spelled out as text, are absent.
fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|v: &f64| v.is_finite()))
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map_or(false, |v| v != 0.0),
        Value::String(s) => {
            let s = s.trim();
            !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
        }
        _ => false,
    })
}
