use crate::host::enums::parameter_value::ParameterValue;

impl ParameterValue {
    /// Parses `text` into a value of the same kind as `self`.
    pub fn parse_as(&self, text: &str) -> Result<ParameterValue, String> {
        let text = text.trim_end_matches('\0');
        match self {
            ParameterValue::Bool(_) => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "on" | "1" => Ok(ParameterValue::Bool(true)),
                "false" | "off" | "0" => Ok(ParameterValue::Bool(false)),
                other => Err(format!("'{}' is not a boolean", other)),
            },
            ParameterValue::Int(_) => text.trim().parse::<i64>().map(ParameterValue::Int).map_err(|e| e.to_string()),
            ParameterValue::Float(_) => text.trim().parse::<f64>().map(ParameterValue::Float).map_err(|e| e.to_string()),
            ParameterValue::Text(_) => Ok(ParameterValue::Text(text.to_string())),
        }
    }
}

impl std::fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterValue::Bool(value) => write!(f, "{}", value),
            ParameterValue::Int(value) => write!(f, "{}", value),
            ParameterValue::Float(value) => write!(f, "{}", value),
            ParameterValue::Text(value) => write!(f, "{}", value),
        }
    }
}
