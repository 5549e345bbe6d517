use super::{OutputFormat, Settings};

pub fn thresholds(settings: &Settings) -> anyhow::Result<()> {
    println!("{}", render_thresholds(settings)?);
    Ok(())
}

fn render_thresholds(settings: &Settings) -> anyhow::Result<String> {
    let t = &settings.thresholds;
    match settings.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(t)?),
        OutputFormat::Text => Ok(format!(
            "cpu_threshold:    {:.1}\nmemory_threshold: {:.1}",
            t.cpu_threshold, t.memory_threshold
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resalloc_core::Thresholds;

    #[test]
    fn prints_effective_thresholds() {
        let settings = Settings {
            thresholds: Thresholds::new(90.0, 75.0),
            format: OutputFormat::Json,
            strict: false,
        };
        let value: serde_json::Value =
            serde_json::from_str(&render_thresholds(&settings).unwrap()).unwrap();
        assert_eq!(value["cpu_threshold"], 90.0);
        assert_eq!(value["memory_threshold"], 75.0);
    }

    #[test]
    fn text_format_is_aligned() {
        let settings = Settings {
            thresholds: Thresholds::default(),
            format: OutputFormat::Text,
            strict: false,
        };
        assert_eq!(
            render_thresholds(&settings).unwrap(),
            "cpu_threshold:    80.0\nmemory_threshold: 75.0"
        );
    }
}
