use crate::cli::args::CliArgs;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(url) = args.api_url.as_deref() {
        reqwest::Url::parse(url).map_err(|e| format!("invalid --api-url '{url}': {e}"))?;
    }
    if let Some(timeout) = args.timeout {
        if timeout == 0 {
            return Err("invalid --timeout, expected positive integer".to_string());
        }
    }
    if let Some(page_size) = args.page_size {
        if page_size == 0 {
            return Err("invalid --page-size, expected positive integer".to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn accepts_defaults() {
        let args = CliArgs::parse_from(["bizdir"]);
        assert!(validate(&args).is_ok());
    }

    #[test]
    fn rejects_unparseable_api_url() {
        let args = CliArgs::parse_from(["bizdir", "-u", "not a url"]);
        assert!(validate(&args).is_err());
    }

    #[test]
    fn rejects_zero_timeout_and_page_size() {
        let args = CliArgs::parse_from(["bizdir", "--timeout", "0"]);
        assert!(validate(&args).is_err());
        let args = CliArgs::parse_from(["bizdir", "--page-size", "0"]);
        assert!(validate(&args).is_err());
    }
}
