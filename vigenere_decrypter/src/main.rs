use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info, warn};
use vigenere_analysis::{
    AnalysisError, CoincidenceScan, CoincidenceTable, Key, PercentageReport, ReferenceProfile,
};

/// Command-line arguments for the Vigenère analysis program.
#[derive(Parser, Debug)]
#[command(version, about = "Key length estimation, key recovery and decryption of Vigenère ciphertexts")]
struct Cli {
    /// Pass file contents to the engine unchanged instead of keeping letters only
    #[arg(long, global = true, help = "Reject non-letter input instead of stripping it")]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count self-coincidences for every cyclic shift to find candidate key lengths
    Scan {
        #[arg(short, long, help = "Path to the input file containing encrypted text")]
        file: String,

        #[arg(short, long, help = "Only list the N strongest shifts")]
        top: Option<usize>,
    },

    /// Recover the key for a given key length and decrypt
    Recover {
        #[arg(short, long, help = "Path to the input file containing encrypted text")]
        file: String,

        #[arg(short = 'l', long, help = "Assumed key length")]
        key_length: usize,

        #[arg(long, value_enum, default_value_t = Language::English, help = "Language of the plaintext")]
        language: Language,

        #[arg(long, help = "Print the score of every shift for every subsequence")]
        dump_table: bool,

        #[arg(short, long, help = "Separate the output into blocks of one key length")]
        grouped: bool,

        #[arg(short, long, help = "Path to the output file for decrypted text")]
        output: Option<String>,
    },

    /// Decrypt with a known key
    Decrypt {
        #[arg(short, long, help = "Path to the input file containing encrypted text")]
        file: String,

        #[arg(short, long, help = "Key string for the cipher")]
        key: String,

        #[arg(short, long, help = "Separate the output into blocks of one key length")]
        grouped: bool,

        #[arg(short, long, help = "Path to the output file for decrypted text")]
        output: Option<String>,
    },

    /// Encrypt with a key, for producing test ciphertexts
    Encrypt {
        #[arg(short, long, help = "Path to the input file containing plain text")]
        file: String,

        #[arg(short, long, help = "Key string for the cipher")]
        key: String,

        #[arg(short, long, help = "Path to the output file for encrypted text")]
        output: Option<String>,
    },

    /// Print letter percentages and index of coincidence of each file
    Frequency {
        #[arg(required = true, help = "Files to analyse")]
        files: Vec<String>,
    },
}

/// Reference language used to score shifts.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Language {
    English,
    German,
}

impl Language {
    fn profile(self) -> ReferenceProfile {
        match self {
            Language::English => ReferenceProfile::ENGLISH,
            Language::German => ReferenceProfile::GERMAN,
        }
    }
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read { path: String, source: std::io::Error },

    #[error("Failed to write {path}: {source}")]
    Write { path: String, source: std::io::Error },

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Main entry point for the Vigenère analysis program.
fn main() {
    env_logger::init();

    let cli: Cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let strict = cli.strict;

    match cli.command {
        Command::Scan { file, top } => {
            let text = read_input(&file, strict)?;
            let result = vigenere_analysis::scan(&text);
            print!("{}", format_scan(&result, top));
        }
        Command::Recover {
            file,
            key_length,
            language,
            dump_table,
            grouped,
            output,
        } => {
            let text = read_input(&file, strict)?;
            let recovery = vigenere_analysis::recover_key(&text, key_length, &language.profile())?;

            for subsequence in &recovery.subsequences {
                println!("{}", subsequence);
            }
            for (i, best) in recovery.table.best_shifts().iter().enumerate() {
                println!(
                    "Max shift for substring {} is shift {} with coincidence {}",
                    i, best.shift, best.score
                );
            }
            if dump_table {
                print!("{}", format_table(&recovery.table));
            }

            println!("Recovered key: {}", recovery.key);
            let plaintext = show_decryption(&text, &recovery.key, grouped)?;
            write_output(output.as_deref(), &plaintext)?;
        }
        Command::Decrypt {
            file,
            key,
            grouped,
            output,
        } => {
            let text = read_input(&file, strict)?;
            let key = Key::parse(&key)?;
            let plaintext = show_decryption(&text, &key, grouped)?;
            write_output(output.as_deref(), &plaintext)?;
        }
        Command::Encrypt { file, key, output } => {
            let text = read_input(&file, strict)?;
            let key = Key::parse(&key)?;
            let ciphertext = vigenere_analysis::encrypt(&text, &key)?;
            println!("{}", ciphertext);
            write_output(output.as_deref(), &ciphertext)?;
        }
        Command::Frequency { files } => {
            for file in files {
                let text = read_input(&file, strict)?;
                let report = vigenere_analysis::percentage_report(&text)?;
                let ic = vigenere_analysis::index_of_coincidence(&text)?;
                print!("{}", format_report(&file, &report, ic));
            }
        }
    }

    Ok(())
}

/// Reads a file and, unless `strict`, keeps only its letters.
fn read_input(path: &str, strict: bool) -> Result<String, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })?;

    let text = if strict {
        content.trim_end_matches(['\r', '\n']).to_string()
    } else {
        clean_text(&content)
    };

    if text.chars().count() < 50 {
        warn!("Text in {} may be too short for reliable analysis", path);
    }
    info!("Read {} characters from {}", text.chars().count(), path);

    Ok(text)
}

/// Cleans text by keeping only alphabetic characters
fn clean_text(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}

/// Prints ciphertext and plaintext one above the other and returns the plaintext.
fn show_decryption(ciphertext: &str, key: &Key, grouped: bool) -> Result<String, CliError> {
    let plaintext = vigenere_analysis::decrypt(ciphertext, key)?;

    let (shown_cipher, shown_plain) = if grouped {
        (
            vigenere_analysis::group(ciphertext, key.len())?,
            vigenere_analysis::group(&plaintext, key.len())?,
        )
    } else {
        (ciphertext.to_string(), plaintext.clone())
    };

    println!("Cipher Text: {}", shown_cipher);
    println!("Plain Text:  {}", shown_plain);

    Ok(plaintext)
}

fn write_output(path: Option<&str>, content: &str) -> Result<(), CliError> {
    if let Some(path) = path {
        std::fs::write(path, content).map_err(|source| CliError::Write {
            path: path.to_string(),
            source,
        })?;
        println!("Output saved to: {}", path);
    }
    Ok(())
}

fn format_scan(result: &CoincidenceScan, top: Option<usize>) -> String {
    let entries = match top {
        Some(n) => result.ranked(n),
        None => result.entries().to_vec(),
    };

    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("Shift {}: {} coincidences\n", entry.shift, entry.count));
    }

    match result.best() {
        Some(best) => out.push_str(&format!(
            "Best Coincidence is shift {} at {} coincidences.\n",
            best.shift, best.count
        )),
        None => out.push_str("Text is too short to scan.\n"),
    }

    out
}

fn format_table(table: &CoincidenceTable) -> String {
    let mut out = String::from("Table Dump:\n");

    for (i, row) in table.rows().iter().enumerate() {
        out.push_str(&"_".repeat(58));
        out.push('\n');
        out.push_str(&format!("Begin Column {}\n", i));
        for (shift, score) in row.iter().enumerate() {
            out.push_str(&format!("Shift {}: {}\n", shift, score));
        }
    }

    out
}

fn format_report(name: &str, report: &PercentageReport, ic: f64) -> String {
    let mut out = format!("{}\nLetter frequency of {}:\n", "_".repeat(35), name);

    for (letter, pct) in report.iter() {
        out.push_str(&format!("Occurrences of {} is: {:.2}\n", letter, pct));
    }
    out.push_str(&format!("Index of coincidence: {:.4}\n", ic));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("Hello, World!\n"), "HelloWorld");
        assert_eq!(clean_text("Grüße 123"), "Gre");
    }

    #[test]
    fn test_cli_parses_recover() {
        let cli = Cli::try_parse_from([
            "vigenere_decrypter",
            "recover",
            "-f",
            "cipher.txt",
            "-l",
            "5",
            "--language",
            "german",
            "--grouped",
        ])
        .unwrap();

        match cli.command {
            Command::Recover {
                key_length,
                language,
                grouped,
                dump_table,
                output,
                ..
            } => {
                assert_eq!(key_length, 5);
                assert!(matches!(language, Language::German));
                assert!(grouped);
                assert!(!dump_table);
                assert!(output.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_cli_requires_key_for_decrypt() {
        assert!(Cli::try_parse_from(["vigenere_decrypter", "decrypt", "-f", "x.txt"]).is_err());
    }

    #[test]
    fn test_format_scan() {
        let result = vigenere_analysis::scan("abab");
        assert_eq!(
            format_scan(&result, None),
            "Shift 1: 0 coincidences\n\
             Shift 2: 4 coincidences\n\
             Shift 3: 0 coincidences\n\
             Best Coincidence is shift 2 at 4 coincidences.\n"
        );
        assert_eq!(
            format_scan(&result, Some(1)),
            "Shift 2: 4 coincidences\nBest Coincidence is shift 2 at 4 coincidences.\n"
        );
        assert_eq!(
            format_scan(&vigenere_analysis::scan("a"), None),
            "Text is too short to scan.\n"
        );
    }

    #[test]
    fn test_format_table() {
        let table =
            vigenere_analysis::score_shifts(&["ab", "cd"], &ReferenceProfile::ENGLISH).unwrap();
        let dump = format_table(&table);
        assert!(dump.starts_with("Table Dump:\n"));
        assert!(dump.contains("Begin Column 1\n"));
        assert_eq!(dump.matches("Shift ").count(), 52);
    }

    #[test]
    fn test_format_report() {
        let report = vigenere_analysis::percentage_report("aab").unwrap();
        let text = format_report("sample.txt", &report, 0.3333);
        assert!(text.contains("Letter frequency of sample.txt:\n"));
        assert!(text.contains("Occurrences of a is: 66.67\n"));
        assert!(text.contains("Occurrences of b is: 33.33\n"));
        assert!(text.contains("Index of coincidence: 0.3333\n"));
    }
}
