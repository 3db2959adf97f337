use crate::add_test;
use crate::common::{numbered_lines, sorted_lines, Fixture, DIGITS, DIGITS_SEED_ZERO};
use crate::KB;

// Empty input creates an empty output file
add_test!(empty_file, async {
    let mut fixture = Fixture::with_file("empty.txt", b"");
    let input = fixture.path("empty.txt");
    let output = fixture.path("out.txt");

    let result = fixture.run_cargo(&["-i", &input, "-o", &output, "-s", "1"]).await;

    assert!(result.status.success());
    assert!(fixture.file_exists("out.txt"));
    assert!(fixture.read("out.txt").is_empty());
});

// A single line comes back unchanged for any seed
add_test!(single_line, async {
    let mut fixture = Fixture::with_file("one.txt", b"only line\n");
    let input = fixture.path("one.txt");
    let output = fixture.path("out.txt");

    for seed in ["0", "1", "0xffffffffffffffff"] {
        let result = fixture.run_cargo(&["-i", &input, "-o", &output, "-s", seed]).await;
        assert!(result.status.success());
        assert_eq!(fixture.read("out.txt"), b"only line\n");
    }
});

// A final line without a newline is still emitted, with one appended
add_test!(missing_trailing_newline, async {
    let mut fixture = Fixture::with_file("input.txt", b"0\n1\n2\n3\n4\n5\n6\n7\n8\n9");
    let input = fixture.path("input.txt");
    let output = fixture.path("out.txt");

    let result = fixture.run_cargo(&["-i", &input, "-o", &output, "-s", "0"]).await;

    assert!(result.status.success());
    assert_eq!(fixture.read("out.txt"), DIGITS_SEED_ZERO);
});

// CRLF line endings are normalised to LF
add_test!(crlf_input, async {
    let mut fixture = Fixture::with_file("crlf.txt", b"0\r\n1\r\n2\r\n3\r\n4\r\n5\r\n6\r\n7\r\n8\r\n9\r\n");
    let input = fixture.path("crlf.txt");
    let output = fixture.path("out.txt");

    let result = fixture.run_cargo(&["-i", &input, "-o", &output, "-s", "0"]).await;

    assert!(result.status.success());
    assert_eq!(fixture.read("out.txt"), DIGITS_SEED_ZERO);
});

// Blank lines and non-UTF-8 bytes survive as records
add_test!(blank_and_binary_lines, async {
    let data: &[u8] = b"a\n\n\xff\xfe\n\nb\n";
    let mut fixture = Fixture::with_file("input.txt", data);
    let input = fixture.path("input.txt");
    let output = fixture.path("out.txt");

    let result = fixture.run_cargo(&["-i", &input, "-o", &output, "-s", "4"]).await;

    assert!(result.status.success());
    let shuffled = fixture.read("out.txt");
    assert_eq!(shuffled.len(), data.len());
    assert_eq!(shuffled.iter().filter(|b| **b == b'\n').count(), 5);
    assert_eq!(sorted_lines(&shuffled), sorted_lines(data));
});

// Lines longer than any internal buffer are kept whole
add_test!(very_long_line, async {
    let mut data = vec![b'x'; 256 * KB];
    data.push(b'\n');
    data.extend_from_slice(b"short\n");
    let mut fixture = Fixture::with_file("long.txt", &data);
    let input = fixture.path("long.txt");
    let output = fixture.path("out.txt");

    let result = fixture.run_cargo(&["-i", &input, "-o", &output, "-s", "2"]).await;

    assert!(result.status.success());
    assert_eq!(sorted_lines(&fixture.read("out.txt")), sorted_lines(&data));
});

// An existing, longer output file is overwritten completely
add_test!(output_is_overwritten, async {
    let mut fixture = Fixture::with_file("digits.txt", DIGITS);
    fixture.write("out.txt", &numbered_lines(100));
    let input = fixture.path("digits.txt");
    let output = fixture.path("out.txt");

    let result = fixture.run_cargo(&["-i", &input, "-o", &output, "-s", "0"]).await;

    assert!(result.status.success());
    assert_eq!(fixture.read("out.txt"), DIGITS_SEED_ZERO);
});

// A missing input file exits 1 and leaves no output behind
add_test!(non_existent_input, async {
    let mut fixture = Fixture::new();
    let input = fixture.path("missing.txt");
    let output = fixture.path("out.txt");

    let result = fixture.run_cargo(&["-i", &input, "-o", &output]).await;

    assert_eq!(result.status.code(), Some(1));
    assert!(result.stderr.starts_with(&format!("unsort: {input}: ")));
    assert!(!fixture.file_exists("out.txt"));
});

// An output path inside a missing directory exits 1
add_test!(unwritable_output, async {
    let mut fixture = Fixture::with_file("digits.txt", DIGITS);
    let input = fixture.path("digits.txt");
    let output = fixture.path("missing-dir/out.txt");

    let result = fixture.run_cargo(&["-i", &input, "-o", &output]).await;

    assert_eq!(result.status.code(), Some(1));
    assert!(result.stderr.contains("cannot create output"));
});
