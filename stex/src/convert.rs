use crate::{Error, PngResource, Result};

/// Size of the Godot STEX header in bytes.
pub const HEADER_SIZE: usize = 32;

/// Payload recovered from a STEX texture together with its size metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    data: Vec<u8>,
    original_size: usize,
}

impl Conversion {
    /// Bytes left after the header was removed.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Length of the input, header included.
    pub fn original_size(&self) -> usize {
        self.original_size
    }

    /// Length of the payload, always `original_size - HEADER_SIZE`.
    pub fn output_size(&self) -> usize {
        self.data.len()
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Consume the conversion and wrap its payload as a png resource named after `input_name`.
    ///
    /// See [`output_filename`](crate::output_filename) for how the name is derived.
    pub fn into_resource(self, input_name: &str) -> PngResource {
        PngResource::new(input_name, self.data)
    }
}

/// Strip the STEX header from `input`.
///
/// Header contents are not inspected and the payload is not checked to be a valid png.
///
/// # Example
///
/// ```
/// let mut texture = vec![0; stex::HEADER_SIZE];
/// texture.extend_from_slice(&[0x89, 0x50, 0x4E, 0x47]);
///
/// let conversion = stex::convert(&texture).unwrap();
/// assert_eq!(conversion.output_size(), 4);
/// assert_eq!(conversion.data(), &[0x89, 0x50, 0x4E, 0x47]);
/// ```
pub fn convert(input: &[u8]) -> Result<Conversion> {
    let size = input.len();

    if size < HEADER_SIZE {
        return Err(Error::InputTooSmall {
            size,
            required: HEADER_SIZE,
        });
    }

    let data = &input[HEADER_SIZE..];

    if data.is_empty() {
        return Err(Error::EmptyOutput);
    }

    Ok(Conversion {
        data: data.to_vec(),
        original_size: size,
    })
}
