use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(crate::config::CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Spamsift Configuration
#
# Any omitted value keeps its stock default. Keyword lists and pattern
# tables replace the defaults wholesale when present; run
# `spamsift rules` to see the full effective rule set.

[weights]
high = 25
medium = 10
low = 3
multi_keyword_bonus = 15
pattern = 20
formatting = 5

[thresholds]
# Confidence at or above this is spam (1-100)
spam = 60
multi_keyword_count = 3
short_message_len = 50
max_input_len = 100000

# Example keyword override (uncomment to replace the high tier):
# [keywords]
# high = ["winner", "lottery", "free money"]
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {} configuration file", config_path.display());

    Ok(())
}
