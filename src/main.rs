use textembed::embedder::Embedder;
use textembed::errors::{EmbedError, EmbedResult};
use textembed::{output, DEFAULT_MODEL_ID};

fn main() {
    // Diagnostics go to stderr; stdout carries exactly the one vector line.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("textembed: {e}");
        std::process::exit(1);
    }
}

fn run() -> EmbedResult<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = text_arg(&args)?;

    let mut embedder = Embedder::new(DEFAULT_MODEL_ID)?;
    let vector = embedder.embed(text)?;
    println!("{}", output::csv_line(&vector));
    Ok(())
}

/// The first positional argument is the text to embed; extras are ignored.
fn text_arg(args: &[String]) -> EmbedResult<&str> {
    match args.first() {
        Some(text) => Ok(text.as_str()),
        None => Err(EmbedError::Usage(
            "expected one text argument: textembed <text>".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_arg_takes_first_positional() {
        let args = vec!["hello world".to_string()];
        assert_eq!(text_arg(&args).unwrap(), "hello world");
    }

    #[test]
    fn test_text_arg_ignores_extras() {
        let args = vec!["cat".to_string(), "--verbose".to_string()];
        assert_eq!(text_arg(&args).unwrap(), "cat");
    }

    #[test]
    fn test_text_arg_missing_is_usage_error() {
        let err = text_arg(&[]).unwrap_err();
        assert!(matches!(err, EmbedError::Usage(_)));
    }
}
