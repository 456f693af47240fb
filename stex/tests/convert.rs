use std::error::Error;
use stex::{HEADER_SIZE, convert, output_filename};

const PNG_MAGIC: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];

fn texture(payload: &[u8]) -> Vec<u8> {
    let mut data = (0..HEADER_SIZE as u8).collect::<Vec<_>>();
    data.extend_from_slice(payload);
    data
}

#[test]
fn test_payload_is_everything_after_header() -> Result<(), Box<dyn Error>> {
    for len in (HEADER_SIZE + 1)..=(HEADER_SIZE + 300) {
        let input = (0..len).map(|x| (x * 7 % 256) as u8).collect::<Vec<_>>();
        let conversion = convert(&input)?;

        assert_eq!(conversion.original_size(), len);
        assert_eq!(conversion.output_size(), len - HEADER_SIZE);
        assert_eq!(conversion.data(), &input[HEADER_SIZE..]);
    }
    Ok(())
}

#[test]
fn test_short_input_is_too_small() {
    for len in 0..HEADER_SIZE {
        match convert(&vec![0; len]) {
            Err(stex::Error::InputTooSmall { size, required }) => {
                assert_eq!(size, len);
                assert_eq!(required, 32);
            }
            x => panic!("expected InputTooSmall for {} bytes, got {:?}", len, x),
        }
    }
}

#[test]
fn test_header_only_is_empty_output() {
    assert!(matches!(
        convert(&texture(&[])),
        Err(stex::Error::EmptyOutput)
    ));
}

#[test]
fn test_conversion_is_repeatable() -> Result<(), Box<dyn Error>> {
    let input = texture(b"\x89PNG\r\n\x1a\nrest of the image");
    assert_eq!(convert(&input)?, convert(&input)?);
    Ok(())
}

#[test]
fn test_png_magic_after_zeroed_header() -> Result<(), Box<dyn Error>> {
    let mut input = vec![0; 32];
    input.extend_from_slice(&PNG_MAGIC);

    let conversion = convert(&input)?;
    assert_eq!(conversion.output_size(), 4);
    assert_eq!(conversion.data(), &PNG_MAGIC);
    Ok(())
}

#[test]
fn test_ten_bytes() {
    let err = convert(&[0; 10]).unwrap_err();
    assert!(matches!(
        err,
        stex::Error::InputTooSmall {
            size: 10,
            required: 32
        }
    ));
    assert_eq!(
        err.to_string(),
        "Input is too small (10 bytes). Expected at least 32 bytes for the header."
    );
}

#[test]
fn test_output_filename() {
    assert_eq!(output_filename("image.stex"), "image.png");
    assert_eq!(output_filename("IMAGE.STEX"), "IMAGE.png");
    assert_eq!(output_filename("noext"), "noext.png");
    assert_eq!(output_filename(""), "converted.png");
}

#[test]
fn test_resource_from_conversion() -> Result<(), Box<dyn Error>> {
    let resource = convert(&texture(&PNG_MAGIC))?.into_resource("icon.stex");

    assert_eq!(resource.filename(), "icon.png");
    assert_eq!(resource.mime(), "image/png");
    assert_eq!(resource.into_data(), PNG_MAGIC.to_vec());
    Ok(())
}
