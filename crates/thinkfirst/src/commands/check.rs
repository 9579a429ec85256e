use thinkfirst_core::Config;

fn verdict(config: &Config, url: &str) -> &'static str {
    if config.is_watched(url) {
        "watched"
    } else {
        "not watched"
    }
}

pub fn run(url: &str) -> anyhow::Result<()> {
    let config = Config::new();
    println!("{}: {}", url, verdict(&config, url));
    Ok(())
}
