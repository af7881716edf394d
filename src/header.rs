//! Renders and writes the generated header. The five line shape is a compile-time
//! contract with the consuming build, which `#include`s the file and reads the
//! macro as an integer literal, so the template must not drift by a byte.

use std::fs;
use std::io::Write;

use crate::errors::Error;
use crate::time::TimeProvider;

/// Include guard wrapping the generated header
pub const GUARD: &str = "BUILD_TIMESTAMP_H";
/// The macro the generated header defines
pub const MACRO: &str = "BUILD_TIMESTAMP";

/// Render the header with the given epoch seconds value
pub fn render(timestamp: i64) -> String {
    format!(
        "#ifndef {GUARD}\n#define {GUARD}\n\n#define {MACRO} {timestamp}\n\n#endif /* {GUARD} */\n"
    )
}

/// Read the clock once and write the rendered header to `outfile`, truncating any
/// previous content. Returns the stamped value.
pub fn write(outfile: &str, time: &impl TimeProvider) -> Result<i64, Error> {
    let timestamp = time.unix_seconds();

    // Handle is scoped to this function and released on every exit path
    let mut file = fs::File::create(outfile)?;
    file.write_all(render(timestamp).as_bytes())?;

    Ok(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test;
    use crate::test_time::{FIXED_UNIX_SECONDS, FixedTimeProvider};
    use crate::time::SystemTimeProvider;
    use pretty_assertions::assert_eq;

    #[test]
    fn render_matches_the_template() {
        assert_eq!(
            render(1700000000),
            "#ifndef BUILD_TIMESTAMP_H\n\
             #define BUILD_TIMESTAMP_H\n\
             \n\
             #define BUILD_TIMESTAMP 1700000000\n\
             \n\
             #endif /* BUILD_TIMESTAMP_H */\n"
        );
    }

    #[test]
    fn render_defines_the_macro_on_the_fourth_line() {
        let rendered = render(1700000000);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[3], "#define BUILD_TIMESTAMP 1700000000");
    }

    #[test]
    fn write_creates_a_file_with_the_provided_time() {
        let outfile = test::fixtures::outfile_path();

        let timestamp = write(&outfile, &FixedTimeProvider).unwrap();

        assert_eq!(timestamp, FIXED_UNIX_SECONDS);
        assert_eq!(
            fs::read_to_string(&outfile).unwrap(),
            render(FIXED_UNIX_SECONDS)
        );
        delete_outfile(&outfile);
    }

    #[test]
    fn write_replaces_previous_content_entirely() {
        let outfile = test::fixtures::outfile_path();
        let previous = "unrelated content\n".repeat(40);
        fs::write(&outfile, previous).unwrap();

        write(&outfile, &FixedTimeProvider).unwrap();

        assert_eq!(
            fs::read_to_string(&outfile).unwrap(),
            render(FIXED_UNIX_SECONDS)
        );
        delete_outfile(&outfile);
    }

    #[test]
    fn write_twice_is_monotonic() {
        let outfile = test::fixtures::outfile_path();

        let first = write(&outfile, &SystemTimeProvider).unwrap();
        let second = write(&outfile, &SystemTimeProvider).unwrap();

        assert!(second >= first);
        assert_eq!(fs::read_to_string(&outfile).unwrap(), render(second));
        delete_outfile(&outfile);
    }

    #[test]
    fn write_into_a_missing_directory_fails() {
        let outfile = format!("{}/missing/stamp.h", test::fixtures::outfile_path());

        let result = write(&outfile, &FixedTimeProvider);

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().source, "io");
    }

    fn delete_outfile(outfile: &str) {
        fs::remove_file(outfile).unwrap();
    }
}
