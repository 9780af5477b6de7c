use anagram_server::api::handlers::{
    handle_add_words, handle_anagrams, handle_clear_corpus, handle_delete_group,
    handle_delete_word,
};
use anagram_server::api::protocol::{ENDPOINT_ANAGRAMS, ENDPOINT_DELETE_WORD, ENDPOINT_WORDS};
use anagram_server::index::store::AnagramIndex;
use anagram_server::ingest::loader::load_dictionary;
use axum::{
    Router,
    extract::Extension,
    routing::{delete, get, post},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

struct ServerArgs {
    bind_addr: SocketAddr,
    dictionary: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> anyhow::Result<ServerArgs> {
    let mut bind_addr: SocketAddr = "127.0.0.1:3000".parse()?;
    let mut dictionary: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" if i + 1 < args.len() => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--dict" if i + 1 < args.len() => {
                dictionary = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            other => anyhow::bail!("Unrecognized or incomplete argument: {}", other),
        }
    }

    Ok(ServerArgs {
        bind_addr,
        dictionary,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let ServerArgs {
        bind_addr,
        dictionary,
    } = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: {} [--bind <addr:port>] [--dict <path>]", args[0]);
            eprintln!("Example: {} --bind 127.0.0.1:3000 --dict dictionary.txt", args[0]);
            std::process::exit(1);
        }
    };

    // 1. Index:
    let index = Arc::new(AnagramIndex::new());

    // 2. Seed corpus:
    match &dictionary {
        Some(path) => {
            tracing::info!("Seeding index from {}...", path.display());
            let words = load_dictionary(path)?;
            let added = index.seed(words);
            tracing::info!(
                "Seeded {} words across {} anagram groups",
                added,
                index.group_count()
            );
        }
        None => {
            tracing::info!("No dictionary supplied, starting with an empty corpus");
        }
    }

    // 3. HTTP Router:
    let app = Router::new()
        .route(
            ENDPOINT_WORDS,
            post(handle_add_words).delete(handle_clear_corpus),
        )
        .route(
            ENDPOINT_ANAGRAMS,
            get(handle_anagrams).delete(handle_delete_group),
        )
        .route(ENDPOINT_DELETE_WORD, delete(handle_delete_word))
        .layer(Extension(index));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_args;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("anagram_server")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let parsed = parse_args(&args(&[])).unwrap();

        assert_eq!(parsed.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert!(parsed.dictionary.is_none());
    }

    #[test]
    fn test_parse_args_bind_and_dict() {
        let parsed = parse_args(&args(&["--bind", "0.0.0.0:8080", "--dict", "words.txt"])).unwrap();

        assert_eq!(parsed.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(parsed.dictionary.as_deref(), Some(std::path::Path::new("words.txt")));
    }

    #[test]
    fn test_parse_args_flag_without_value_is_an_error() {
        // A trailing flag must fail cleanly instead of indexing past the args
        assert!(parse_args(&args(&["--bind"])).is_err());
        assert!(parse_args(&args(&["--dict"])).is_err());
    }

    #[test]
    fn test_parse_args_unknown_flag_is_an_error() {
        assert!(parse_args(&args(&["--port", "8080"])).is_err());
    }
}
