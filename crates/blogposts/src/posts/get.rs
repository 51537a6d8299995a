use blogposts_core::{CollectionStore, Post};
use colored::Colorize;

use crate::prelude::{println, *};

#[derive(Debug, clap::Args, Clone)]
pub struct GetOptions {
    /// Post id
    #[arg(value_name = "ID")]
    pub id: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(store: &CollectionStore, options: GetOptions) -> Result<()> {
    let post = store
        .get(options.id)
        .map_err(|e| eyre!("Post {}: {e}", options.id))?;

    if options.json {
        let json = serde_json::to_string_pretty(&post)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", format_post_text(&post));
    }

    Ok(())
}

fn format_post_text(post: &Post) -> String {
    let mut result = String::new();

    result.push_str(&f!(
        "\n{} {}\n",
        f!("[{}]", post.id).yellow().bold(),
        post.title.white().bold()
    ));
    result.push_str(&f!("{}: {}\n\n", "By".green(), post.author.bright_white()));
    result.push_str(&post.content);
    result.push('\n');

    result
}
