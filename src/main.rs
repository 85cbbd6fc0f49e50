use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use bitok::{Language, StopWords, TokenizeError, TokenizerConfig, TokenizerKind, Vocabulary};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Tokenize English or Korean text into words, sentences or morphemes.
#[derive(Debug, Parser)]
#[command(name = "bitok", version)]
struct Cli {
    /// Text to tokenize. Read from stdin when omitted.
    text: Option<String>,

    /// Language branch (`en` or `ko`). Defaults to the config/`BITOK_LANGUAGE`.
    #[arg(short, long)]
    lang: Option<Language>,

    /// Tokenizer to run: word, sentence or morpheme.
    #[arg(short, long, default_value = "word")]
    kind: TokenizerKind,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Drop English stopwords from the output.
    #[arg(long)]
    stopwords: bool,

    /// Print token counts instead of tokens.
    #[arg(long)]
    vocab: bool,

    /// Emit JSON.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "bitok=debug" } else { "bitok=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn read_input(text: Option<String>) -> Result<String, TokenizeError> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Post-processing and output format flags.
#[derive(Debug, Clone, Copy, Default)]
struct OutputOptions {
    stopwords: bool,
    vocab: bool,
    json: bool,
}

/// Applies the stopword filter and renders tokens, one per line or as JSON.
fn render(
    mut tokens: Vec<String>,
    language: Language,
    output: OutputOptions,
) -> Result<String, Box<dyn std::error::Error>> {
    if output.stopwords {
        tokens = StopWords::for_language(language)?.filter(tokens);
    }

    let mut rendered = String::new();
    if output.vocab {
        let vocab = Vocabulary::from_tokens(&tokens);
        let pairs: Vec<(&str, usize)> = vocab.most_common(None);
        if output.json {
            rendered.push_str(&serde_json::to_string(&pairs)?);
            rendered.push('\n');
        } else {
            for (token, count) in pairs {
                rendered.push_str(&format!("{count}\t{token}\n"));
            }
        }
    } else if output.json {
        rendered.push_str(&serde_json::to_string(&tokens)?);
        rendered.push('\n');
    } else {
        for token in &tokens {
            rendered.push_str(token);
            rendered.push('\n');
        }
    }
    Ok(rendered)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => TokenizerConfig::from_file(path)?,
        None => TokenizerConfig::default(),
    };
    if let Some(language) = cli.lang {
        config = config.with_language(language);
    }

    let input = read_input(cli.text)?;
    let tokens = config.tokenize(cli.kind, &input)?;
    tracing::debug!(kind = %cli.kind, language = %config.language, count = tokens.len(), "tokenized");

    let output = OutputOptions {
        stopwords: cli.stopwords,
        vocab: cli.vocab,
        json: cli.json,
    };
    print!("{}", render(tokens, config.language, output)?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{render, OutputOptions};
    use bitok::Language;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn plain_output_is_one_token_per_line() {
        let words = tokens(&["The", "cat", "."]);
        let rendered = render(words, Language::English, OutputOptions::default()).unwrap();
        assert_eq!(rendered, "The\ncat\n.\n");
    }

    #[test]
    fn stopwords_are_dropped_before_rendering() {
        let output = OutputOptions {
            stopwords: true,
            json: true,
            ..OutputOptions::default()
        };
        let words = tokens(&["The", "cat", "sat", "on", "the", "mat"]);
        let rendered = render(words, Language::English, output).unwrap();
        assert_eq!(rendered, "[\"cat\",\"sat\",\"mat\"]\n");
    }

    #[test]
    fn vocab_counts_as_text_and_json() {
        let words = tokens(&["mat", "cat", "mat"]);
        let text = OutputOptions {
            vocab: true,
            ..OutputOptions::default()
        };
        assert_eq!(
            render(words.clone(), Language::English, text).unwrap(),
            "2\tmat\n1\tcat\n"
        );

        let json = OutputOptions {
            vocab: true,
            json: true,
            ..OutputOptions::default()
        };
        assert_eq!(
            render(words, Language::English, json).unwrap(),
            "[[\"mat\",2],[\"cat\",1]]\n"
        );
    }

    #[test]
    fn korean_stopwords_are_unsupported() {
        let output = OutputOptions {
            stopwords: true,
            ..OutputOptions::default()
        };
        let error = render(tokens(&["책을", "읽었다"]), Language::Korean, output).unwrap_err();
        assert_eq!(error.to_string(), "stopword tokenizer does not support korean");
    }
}
