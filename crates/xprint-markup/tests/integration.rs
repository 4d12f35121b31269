use xprint_markup::{render, segments, Segment};

#[test]
fn test_mixed_text_and_markers() {
    let input = "[$[fg:(0,255,0)](ok)] build $[sgr:bold|fg:r](failed) in 3s";
    let parts: Vec<_> = segments(input).collect();

    assert_eq!(
        parts,
        vec![
            Segment::Text("["),
            Segment::Marked {
                options: "fg:(0,255,0)",
                content: "ok"
            },
            Segment::Text("] build "),
            Segment::Marked {
                options: "sgr:bold|fg:r",
                content: "failed"
            },
            Segment::Text(" in 3s"),
        ]
    );
}

#[test]
fn test_render_wraps_each_marker() {
    let input = "$[a](x)-$[b](y)";
    let output = render(input, |opts, content| {
        Ok::<_, std::convert::Infallible>(format!("{}={}", opts, content))
    })
    .unwrap();

    assert_eq!(output, "a=x-b=y");
}

#[test]
fn test_multibyte_text_is_preserved() {
    let input = "日本 $[fg:c](語) ✓";
    let output = render(input, |_, content| {
        Ok::<_, std::convert::Infallible>(format!("<{}>", content))
    })
    .unwrap();

    assert_eq!(output, "日本 <語> ✓");
}
