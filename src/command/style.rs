use super::number;
use crate::fence::DisplayStyle;
use crate::{Error, Result};

pub fn run(args: &[String]) -> Result<()> {
    let [radius] = args else {
        return Err(Error::Cli("Usage: style <radius>".into()));
    };
    let style = DisplayStyle::of(number(radius)?);
    println!("{}", serde_json::to_string_pretty(&style)?);
    Ok(())
}
