//! End-to-end segmentation scenarios through the public API.
//!
//! Covers the single-SMS ceilings, concatenation boundaries, header sizes,
//! forced charsets and selector rejection.

mod common;

use common::{TestResult, gsm_text, ucs2_text};
use rstest::rstest;
use smsplit::{
    Charset,
    CharsetSelector,
    HeaderSize,
    SegmentationError,
    SegmentationRequest,
    segment,
    segment_text,
    try_segment,
};

#[test]
fn single_sms_holds_160_gsm_characters() {
    let segmentation = segment_text(&gsm_text(160));
    assert_eq!(segmentation.total_length(), 160);
    assert_eq!(segmentation.fragment_count(), 1);
    assert_eq!(segmentation.remaining_chars(), 0);
}

#[test]
fn one_more_character_needs_concatenation() {
    let segmentation = segment_text(&gsm_text(161));
    assert_eq!(segmentation.fragment_count(), 2);
    assert_eq!(segmentation.fragments()[0].length(), 153);
    assert_eq!(segmentation.remaining_chars(), 145);
}

#[test]
fn euro_sign_at_boundary_moves_to_next_fragment() {
    let text = format!("{}€{}", gsm_text(152), gsm_text(17));
    let segmentation = segment_text(&text);
    let [first, second] = segmentation.fragments() else {
        panic!("expected two fragments, got {}", segmentation.fragment_count());
    };
    assert_eq!(first.content(), gsm_text(152));
    assert_eq!(second.content(), format!("€{}", gsm_text(17)));
}

#[test]
fn surrogate_pair_at_boundary_moves_to_next_fragment() {
    let text = format!("{}🐿{}", ucs2_text(66), ucs2_text(3));
    let segmentation = segment_text(&text);
    assert_eq!(segmentation.charset(), Charset::Unicode);
    assert_eq!(segmentation.fragments()[0].length(), 66);
    assert_eq!(segmentation.fragments()[0].bytes(), 132);
    assert!(segmentation.fragments()[1].content().starts_with('🐿'));
}

#[rstest]
#[case(format!("{}€{}", gsm_text(152), gsm_text(6)), 160)]
#[case(format!("{}🐿{}", ucs2_text(66), ucs2_text(2)), 140)]
#[case(gsm_text(160), 160)]
#[case(ucs2_text(70), 140)]
fn near_ceiling_messages_collapse_into_one_fragment(#[case] text: String, #[case] bytes: usize) {
    let segmentation = segment_text(&text);
    assert_eq!(segmentation.fragment_count(), 1);
    assert!(!segmentation.is_concatenated());
    assert_eq!(segmentation.total_bytes(), bytes);
    assert_eq!(segmentation.fragments()[0].content(), text);
}

#[rstest]
#[case(HeaderSize::Six, 2)]
#[case(HeaderSize::Seven, 3)]
fn header_size_decides_fragment_count(#[case] header: HeaderSize, #[case] expected: usize) {
    let request = SegmentationRequest::new(gsm_text(306)).with_header(header);
    let segmentation = segment(&request);
    assert_eq!(segmentation.total_length(), 306);
    assert_eq!(segmentation.fragment_count(), expected);
}

#[test]
fn forcing_unicode_doubles_gsm_cost() {
    let request = SegmentationRequest::new(gsm_text(80)).with_charset(CharsetSelector::Unicode);
    let segmentation = segment(&request);
    assert_eq!(segmentation.charset(), Charset::Unicode);
    assert_eq!(segmentation.total_bytes(), 160);
    assert_eq!(segmentation.fragment_count(), 2);
}

#[test]
fn forcing_gsm_packs_unicode_text() {
    let request = SegmentationRequest::new(ucs2_text(150)).with_charset(CharsetSelector::Gsm);
    let segmentation = segment(&request);
    assert_eq!(segmentation.charset(), Charset::Gsm);
    assert_eq!(segmentation.total_bytes(), 150);
    assert_eq!(segmentation.remaining_chars(), 10);
}

#[rstest]
#[case("XXXX", 0, SegmentationError::UnsupportedCharset { selector: "XXXX".to_owned() })]
#[case("GSM", 8, SegmentationError::InvalidHeaderSize { bytes: 8 })]
#[case("", 1, SegmentationError::InvalidHeaderSize { bytes: 1 })]
fn invalid_selectors_are_rejected(
    #[case] charset: &str,
    #[case] header_bytes: u8,
    #[case] expected: SegmentationError,
) {
    assert_eq!(try_segment("hello", charset, header_bytes), Err(expected));
}

#[test]
fn error_messages_name_the_offending_value() {
    let charset = try_segment("hello", "XXXX", 0).expect_err("unsupported charset");
    assert_eq!(
        charset.to_string(),
        "charset not supported: expected GSM or Unicode, found `XXXX`"
    );
    let header = try_segment("hello", "GSM", 9).expect_err("invalid header");
    assert_eq!(header.to_string(), "UDH length must be 6 or 7 bytes, found 9");
}

#[test]
fn json_request_round_trips_to_json_result() -> TestResult {
    let request: SegmentationRequest =
        serde_json::from_str(r#"{"content":"Hello World","charset":"auto"}"#)?;
    let value = serde_json::to_value(segment(&request))?;
    assert_eq!(value["charset"], "GSM");
    assert_eq!(value["fragmentCount"], 1);
    assert_eq!(value["remainingChars"], 149);
    Ok(())
}

#[test]
fn concurrent_calls_with_different_headers_do_not_interfere() {
    let six = SegmentationRequest::new(gsm_text(306));
    let seven = six.clone().with_header(HeaderSize::Seven);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..64)
            .map(|idx| {
                let (request, expected) = if idx % 2 == 0 { (&six, 2) } else { (&seven, 3) };
                scope.spawn(move || (segment(request).fragment_count(), expected))
            })
            .collect();

        for handle in handles {
            let (actual, expected) = handle.join().expect("segmentation thread panicked");
            assert_eq!(actual, expected);
        }
    });
}

#[test]
fn concurrent_calls_with_mixed_charsets_do_not_interfere() {
    let cases = [
        ("Hello World".to_owned(), Charset::Gsm, 11, 1),
        (gsm_text(160), Charset::Gsm, 160, 1),
        (gsm_text(161), Charset::Gsm, 161, 2),
        (ucs2_text(70), Charset::Unicode, 70, 1),
        (ucs2_text(71), Charset::Unicode, 71, 2),
    ];

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..100)
            .map(|idx| {
                let case = &cases[idx % cases.len()];
                scope.spawn(move || (segment_text(&case.0), case))
            })
            .collect();

        for handle in handles {
            let (segmentation, (_, charset, length, parts)) =
                handle.join().expect("segmentation thread panicked");
            assert_eq!(segmentation.charset(), *charset);
            assert_eq!(segmentation.total_length(), *length);
            assert_eq!(segmentation.fragment_count(), *parts);
        }
    });
}
