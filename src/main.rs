use clap::Parser;
use string_tools::utils::{logger, validation::Validate};
use string_tools::{CliConfig, Command, ToolsConfig, WrapConfig, Wrapper};

fn run(config: &CliConfig) -> string_tools::Result<String> {
    let output = match &config.command {
        Command::Capitalize { text } => string_tools::capitalize_first_letter(text)?,
        Command::NthIndex { ch, n, text } => string_tools::find_nth_index_of(*ch, *n, text)
            .map_or_else(|| "-1".to_string(), |index| index.to_string()),
        Command::Sanitize { text } => string_tools::get_java_sanitized_name(text),
        Command::RemoveCommas { text } => string_tools::remove_commas(text),
        Command::RemoveQuotes { text } => string_tools::remove_quotes(text),
        Command::Reverse { text } => string_tools::reverse(text),
        Command::TrimAll { text } => string_tools::trim_all(text),
        Command::Wrap { width, html, text } => {
            // 命令列參數優先，其次是設定檔，最後是預設值
            let tools_config = match &config.config {
                Some(path) => ToolsConfig::from_file(path)?,
                None => ToolsConfig::default(),
            };
            let wrap_config = WrapConfig {
                max_chars_per_line: width.unwrap_or(tools_config.wrap.max_chars_per_line),
                html_safe: *html || tools_config.wrap.html_safe,
                ..tools_config.wrap
            };
            wrap_config.validate()?;
            tracing::debug!("Wrap config: {:?}", wrap_config);
            Wrapper::new(wrap_config).wrap(text)
        }
    };

    if config.json {
        let value = serde_json::json!({
            "command": config.command.name(),
            "input": config.command.text(),
            "output": output,
        });
        return Ok(serde_json::to_string(&value)?);
    }

    Ok(output)
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ {} failed: {}", config.command.name(), e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}
