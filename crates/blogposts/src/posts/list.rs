use blogposts_core::pagination::total_pages;
use blogposts_core::{CollectionStore, Post};
use colored::Colorize;
use serde::Serialize;

use crate::prelude::{println, *};

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Only show posts whose title contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Number of posts per page
    #[arg(short, long, default_value = "5")]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Pagination metadata for list output
#[derive(Debug, Serialize, Clone)]
pub struct ListPaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub limit: usize,
}

/// One page of posts plus where it sits in the filtered selection
#[derive(Debug, Serialize, Clone)]
pub struct ListOutput {
    pub title: String,
    pub posts: Vec<Post>,
    pub pagination: ListPaginationInfo,
}

pub fn run(store: &CollectionStore, options: ListOptions) -> Result<()> {
    let output = list_posts_data(store, &options)?;

    if options.json {
        println!("{}", format_list_json(&output)?);
    } else {
        print!("{}", format_list_text(&output));
    }

    Ok(())
}

/// Query one page of posts and attach pagination metadata
pub fn list_posts_data(store: &CollectionStore, options: &ListOptions) -> Result<ListOutput> {
    let posts = store
        .query(&options.title, options.page, options.limit)
        .map_err(|e| eyre!("{e}"))?;
    let total_items = store.count(&options.title);

    Ok(ListOutput {
        title: options.title.clone(),
        posts,
        pagination: ListPaginationInfo {
            current_page: options.page,
            total_pages: total_pages(total_items, options.limit),
            total_items,
            limit: options.limit,
        },
    })
}

fn format_list_json(output: &ListOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn format_list_text(output: &ListOutput) -> String {
    let pagination = &output.pagination;
    let mut result = String::new();

    result.push_str(&f!(
        "\n{}\n\n",
        f!(
            "POSTS (Page {} of {}, {} total)",
            pagination.current_page,
            pagination.total_pages.max(1),
            pagination.total_items
        )
        .bright_cyan()
        .bold()
    ));

    if output.posts.is_empty() {
        result.push_str(&f!("{}\n", "No posts on this page.".yellow()));
    } else {
        let mut table = new_table();
        table.add_row(prettytable::row!["ID", "Title", "Author"]);
        for post in &output.posts {
            table.add_row(prettytable::row![post.id, post.title, post.author]);
        }
        result.push_str(&table.to_string());
    }

    if pagination.current_page < pagination.total_pages {
        result.push_str(&f!(
            "\n{}: {}\n",
            "Next page".green(),
            f!(
                "blogposts posts list --page {} --limit {}",
                pagination.current_page + 1,
                pagination.limit
            )
            .cyan()
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CollectionStore {
        CollectionStore::from_posts(vec![
            Post::new(1, "Alpha", "a", "ann"),
            Post::new(2, "Beta", "b", "bob"),
            Post::new(3, "Gamma", "c", "cid"),
        ])
    }

    fn options(title: &str, page: usize, limit: usize) -> ListOptions {
        ListOptions {
            title: title.to_string(),
            page,
            limit,
            json: false,
        }
    }

    #[test]
    fn test_list_posts_data_first_page() {
        let output = list_posts_data(&store(), &options("", 1, 2)).unwrap();

        assert_eq!(output.posts.len(), 2);
        assert_eq!(output.pagination.total_items, 3);
        assert_eq!(output.pagination.total_pages, 2);
    }

    #[test]
    fn test_list_posts_data_counts_filtered_selection() {
        let output = list_posts_data(&store(), &options("GAMMA", 1, 2)).unwrap();

        assert_eq!(output.posts[0].id, 3);
        assert_eq!(output.pagination.total_items, 1);
        assert_eq!(output.pagination.total_pages, 1);
    }

    #[test]
    fn test_list_posts_data_rejects_zero_limit() {
        let result = list_posts_data(&store(), &options("", 1, 0));
        assert!(result.is_err());
    }

    #[test]
    fn test_format_list_json() {
        let output = list_posts_data(&store(), &options("", 2, 2)).unwrap();
        let json = format_list_json(&output).unwrap();

        assert!(json.contains("\"title\": \"Gamma\""));
        assert!(json.contains("\"current_page\": 2"));
        assert!(!json.contains("Alpha"));
    }

    #[test]
    fn test_format_list_text_shows_rows_and_next_page() {
        let output = list_posts_data(&store(), &options("", 1, 2)).unwrap();
        let text = format_list_text(&output);

        assert!(text.contains("Alpha"));
        assert!(text.contains("bob"));
        assert!(!text.contains("Gamma"));
        assert!(text.contains("--page 2"));
    }

    #[test]
    fn test_format_list_text_empty_page() {
        let output = list_posts_data(&store(), &options("", 5, 2)).unwrap();
        let text = format_list_text(&output);

        assert!(text.contains("No posts on this page."));
        assert!(!text.contains("Next page"));
    }
}
