use crate::{input, output, process, report};

use std::io;
use std::sync::mpsc;

/// Replay the operations script read from `input_stream`, then write the
/// resulting accounts to `output_stream`.
///
/// Parsing, applying and reporting each run on their own thread, connected by
/// channels, so operations are applied while the script is still being read.
pub fn run(
    input_stream: (impl io::Read + Send + 'static),
    output_stream: impl io::Write,
) -> Result<(), io::Error> {
    let (operations, input_errors) = input::parse(input_stream);

    let (accounts_tx, accounts) = mpsc::channel();
    let applied = process::process(operations, accounts_tx);

    let reporters = report::log(input_errors, applied);

    output::write(output_stream, accounts)?;

    for reporter in reporters {
        reporter
            .join()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "reporter thread panicked"))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn test_run() {
        let data = r#"op,account,counterparty,holder,type,amount,overdraft
open,100000,,John Doe,savings,1000,
open,200000,,Jane Smith,checking,0,500
open,300000,,Closing Soon,savings,5,
deposit,100000,,,,500,
withdraw,100000,,,,2000,
withdraw,200000,,,,300,
withdraw,200000,,,,300,
badly formatted row
transfer,100000,200000,,,200,
transfer,100000,999999,,,200,
balance,100000,,,,,
history,100000,,,,,
close,300000,,,,,
deposit,300000,,,,5,"#;
        let mut output = Vec::new();

        run(std::io::Cursor::new(data), &mut output).expect("should run");

        let want = r#"account,holder,type,balance,overdraft,transactions
100000,John Doe,savings,1300,0,2
200000,Jane Smith,checking,-100,500,2
"#;
        assert_eq!(want, String::from_utf8(output).unwrap());
    }

    #[test]
    fn test_run_empty_script() {
        let mut output = Vec::new();

        run(
            std::io::Cursor::new("op,account,counterparty,holder,type,amount,overdraft\n"),
            &mut output,
        )
        .expect("should run");

        assert!(output.is_empty());
    }
}
