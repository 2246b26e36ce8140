use crate::error::InputError;
use crate::matrix::{ResistanceStrength, ThreatCapability};
use serde::Serialize;
use serde_json::{Map, Value};

pub const DEFAULT_TCAP: i64 = 3;
pub const DEFAULT_RS: i64 = 3;
pub const DEFAULT_ASSET_VALUE: f64 = 100_000.0;
pub const DEFAULT_TEF: f64 = 1.0;
pub const DEFAULT_SEVERITY: f64 = 5.0;
pub const DEFAULT_CRITICALITY: f64 = 5.0;
pub const DEFAULT_COUNTERMEASURE: f64 = 3.0;

/// Raw calculation request as posted by the client.
///
/// Every field is optional and loosely typed: numbers, numeric strings and
/// booleans are accepted. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskPayload {
    pub tcap: Option<Value>,
    pub rs: Option<Value>,
    pub asset_value: Option<Value>,
    pub tef: Option<Value>,
    pub severity: Option<Value>,
    pub criticality: Option<Value>,
    pub countermeasure: Option<Value>,
}

/// Validated, clamped inputs. Every bounded field is inside its range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskInputs {
    pub tcap: ThreatCapability,
    pub rs: ResistanceStrength,
    pub asset_value: f64,
    pub tef: f64,
    pub severity: f64,
    pub criticality: f64,
    pub countermeasure: f64,
}

impl From<Map<String, Value>> for RiskPayload {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            tcap: body.remove("tcap"),
            rs: body.remove("rs"),
            asset_value: body.remove("asset_value"),
            tef: body.remove("tef"),
            severity: body.remove("severity"),
            criticality: body.remove("criticality"),
            countermeasure: body.remove("countermeasure"),
        }
    }
}

impl Default for RiskInputs {
    fn default() -> Self {
        Self {
            tcap: ThreatCapability::clamped(DEFAULT_TCAP),
            rs: ResistanceStrength::clamped(DEFAULT_RS),
            asset_value: DEFAULT_ASSET_VALUE,
            tef: DEFAULT_TEF,
            severity: DEFAULT_SEVERITY,
            criticality: DEFAULT_CRITICALITY,
            countermeasure: DEFAULT_COUNTERMEASURE,
        }
    }
}

impl TryFrom<RiskPayload> for RiskInputs {
    type Error = InputError;

    fn try_from(payload: RiskPayload) -> Result<Self, Self::Error> {
        let tcap = coerce_int("tcap", payload.tcap.as_ref(), DEFAULT_TCAP)?;
        let rs = coerce_int("rs", payload.rs.as_ref(), DEFAULT_RS)?;
        let asset_value = coerce_float(
            "asset_value",
            payload.asset_value.as_ref(),
            DEFAULT_ASSET_VALUE,
        )?;
        let tef = coerce_float("tef", payload.tef.as_ref(), DEFAULT_TEF)?;
        let severity = coerce_float("severity", payload.severity.as_ref(), DEFAULT_SEVERITY)?;
        let criticality = coerce_float(
            "criticality",
            payload.criticality.as_ref(),
            DEFAULT_CRITICALITY,
        )?;
        let countermeasure = coerce_float(
            "countermeasure",
            payload.countermeasure.as_ref(),
            DEFAULT_COUNTERMEASURE,
        )?;

        // asset_value and tef are deliberately left unclamped
        Ok(Self {
            tcap: ThreatCapability::clamped(tcap),
            rs: ResistanceStrength::clamped(rs),
            asset_value,
            tef,
            severity: severity.clamp(1.0, 10.0),
            criticality: criticality.clamp(1.0, 10.0),
            countermeasure: countermeasure.clamp(1.0, 5.0),
        })
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
        other => other.to_string(),
    }
}

/// Integer coercion: absent or null falls back to `default`, floats truncate
/// toward zero, strings must hold an integer literal.
fn coerce_int(
    field: &'static str,
    value: Option<&Value>,
    default: i64,
) -> Result<i64, InputError> {
    match value {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(b)) => Ok(i64::from(*b)),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => Ok(i),
            None => {
                let f = n.as_f64().ok_or(InputError::NotFinite { field })?;
                // saturating cast, the tier clamp takes care of the rest
                Ok(f.trunc() as i64)
            }
        },
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| InputError::NotInteger {
            field,
            found: format!("{s:?}"),
        }),
        Some(other) => Err(InputError::NotNumeric {
            field,
            found: describe(other),
        }),
    }
}

/// Float coercion: absent or null falls back to `default`, strings are
/// parsed, non-finite results are rejected so they never reach a formula.
fn coerce_float(
    field: &'static str,
    value: Option<&Value>,
    default: f64,
) -> Result<f64, InputError> {
    let parsed = match value {
        None | Some(Value::Null) => return Ok(default),
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::Number(n)) => n.as_f64().ok_or(InputError::NotFinite { field })?,
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| InputError::NotNumeric {
            field,
            found: format!("{s:?}"),
        })?,
        Some(other) => {
            return Err(InputError::NotNumeric {
                field,
                found: describe(other),
            })
        }
    };

    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(InputError::NotFinite { field })
    }
}
