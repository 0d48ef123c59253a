use crate::handshake::enums::protocol_error::ProtocolError;
use crate::host::enums::parameter_error::ParameterError;

impl From<ParameterError> for ProtocolError {
    fn from(error: ParameterError) -> Self {
        match error {
            ParameterError::NotFound(name) => ProtocolError::UnknownParameter(name),
            ParameterError::Parse { name, reason } => ProtocolError::ParameterParse { name, reason },
        }
    }
}
