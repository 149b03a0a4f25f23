use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("textgauge")
        .version("0.1.0")
        .author("Textgauge Contributors")
        .about("Score web articles on readability and sentiment")
        .arg(clap::arg!(<INPUT> "Input CSV with URL_ID and URL columns").value_parser(clap::value_parser!(std::path::PathBuf)))
        .arg(
            clap::arg!(-o --output <FILE> "Output CSV file")
                .value_name("FILE")
                .default_value("output.csv")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--stopwords <DIR> "Directory of stop-word lists")
                .value_name("DIR")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--positive <FILE> "Positive sentiment word list")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--negative <FILE> "Negative sentiment word list")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--heading_selector <SELECTOR> "CSS selector for the article heading")
                .default_value("h1.entry-title"),
        )
        .arg(
            clap::arg!(--content_selector <SELECTOR> "CSS selector for the article content container")
                .default_value("div.td-post-content"),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Enable step-by-step progress output"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "textgauge", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "textgauge", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "textgauge", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "textgauge", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
