/// Typed value held by the headless parameter table. Updates arrive as text
/// and are parsed into the type the parameter was declared with.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}
