//! Reading the request from, and writing the response to, the byte streams the
//! compiler connects to the plugin.
//!
//! Each stream carries exactly one message with no length prefix.

use std::io::{Read, Write};

use log::debug;
use prost::Message;

use crate::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use crate::error::PluginError;

pub fn decode_request(buf: &[u8]) -> Result<CodeGeneratorRequest, PluginError> {
    let request = CodeGeneratorRequest::decode(buf)?;
    debug!(
        "decoded request: {} files, {} to generate",
        request.proto_file.len(),
        request.file_to_generate.len()
    );
    Ok(request)
}

pub fn encode_response(response: &CodeGeneratorResponse) -> Result<Vec<u8>, PluginError> {
    let mut buf = Vec::with_capacity(response.encoded_len());
    response.encode(&mut buf)?;
    Ok(buf)
}

/// Runs one plugin invocation: reads the whole of `input` as a request, and
/// writes the response to `output`.
pub fn execute<R, W>(mut input: R, mut output: W) -> Result<(), PluginError>
where
    R: Read,
    W: Write,
{
    let mut buf = Vec::new();
    input.read_to_end(&mut buf)?;

    let request = decode_request(&buf)?;
    let response = crate::run_plugin(&request);

    output.write_all(&encode_response(&response)?)?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::compiler::code_generator_response::File;

    #[test]
    fn rejects_malformed_input() {
        // Field 15 claims 16 bytes but the buffer ends first.
        let err = decode_request(&[0x7a, 0x10, 0x0a]).unwrap_err();
        assert!(matches!(err, PluginError::Decode(_)), "{}", err);

        let mut output = Vec::new();
        assert!(execute(&[0x7a, 0x10, 0x0a][..], &mut output).is_err());
        assert!(output.is_empty());
    }

    #[test]
    fn response_round_trips() {
        let response = CodeGeneratorResponse {
            supported_features: Some(1),
            file: vec![File::new("a.txt", "a")],
            ..Default::default()
        };
        let bytes = encode_response(&response).unwrap();
        assert_eq!(CodeGeneratorResponse::decode(&bytes[..]).unwrap(), response);
    }
}
