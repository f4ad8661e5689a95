//! Blogs page: blog cards with their comment sections.

use std::io;

use console::{style, Term};

use super::{parse_id, split_command, split_fields, Exit, Shell};
use crate::pages::BlogPage;
use crate::session::Modal;

const HELP: &str = "Commands:
  list                      show blogs with their comments
  search [term]             set or clear the title filter
  add <title> | <body>      publish a blog
  edit <id>                 edit one blog (fresh fetch)
  set title|body <value>    change a field of the blog being edited
  save                      save the edited blog
  close                     dismiss the blog modal
  delete <id>               delete a blog (asks for confirmation)
  comment <blog_id> <text>  post a comment under a blog
  comment-edit <id>         edit one comment (fresh fetch)
  comment-set <text>        change the text of the comment being edited
  comment-save              save the edited comment
  comment-close             dismiss the comment modal
  comment-delete <id>       delete a comment (asks for confirmation)
  back | quit";

pub async fn run(shell: &Shell, term: &Term) -> io::Result<Exit> {
    let mut page = BlogPage::new(
        shell.http.clone(),
        &shell.api_root,
        shell.notifier.clone(),
        shell.confirm.clone(),
    );

    term.write_line(&format!("\n{}", style("Blog Management").bold()))?;
    page.page_mut().load().await;
    render(&page, term)?;

    loop {
        let line = shell.prompt("blogs")?;
        let (cmd, rest) = split_command(&line);
        match cmd {
            "" => continue,
            "list" => render(&page, term)?,
            "search" => {
                page.page_mut().set_search(rest);
                render(&page, term)?;
            }
            "add" => {
                let (blog_title, blog_body) = split_fields(rest);
                let draft = page.page_mut().draft_mut();
                draft.blog_title = blog_title;
                draft.blog_body = blog_body;
                page.page_mut().submit_draft().await;
                render(&page, term)?;
            }
            "edit" => {
                if let Some(id) = parse_id(term, rest)? {
                    page.page_mut().open_edit(id).await;
                    render_blog_modal(&page, term)?;
                }
            }
            "set" => set_blog_field(&mut page, rest, term)?,
            "save" => {
                page.page_mut().save().await;
                render(&page, term)?;
            }
            "close" => page.page_mut().dismiss(),
            "delete" => {
                if let Some(id) = parse_id(term, rest)? {
                    page.page_mut().delete(id).await;
                    render(&page, term)?;
                }
            }
            "comment" => {
                let (id_arg, text) = split_command(rest);
                if let Some(blog_id) = parse_id(term, id_arg)? {
                    page.set_comment_draft(text);
                    page.add_comment(blog_id).await;
                    render(&page, term)?;
                }
            }
            "comment-edit" => {
                if let Some(id) = parse_id(term, rest)? {
                    page.open_edit_comment(id).await;
                    render_comment_modal(&page, term)?;
                }
            }
            "comment-set" => match page.editing_comment_mut() {
                Some(comment) => comment.comment = rest.to_string(),
                None => {
                    term.write_line("No comment is being edited. Use `comment-edit <id>` first.")?
                }
            },
            "comment-save" => {
                page.save_comment().await;
                render(&page, term)?;
            }
            "comment-close" => page.dismiss_comment(),
            "comment-delete" => {
                if let Some(id) = parse_id(term, rest)? {
                    page.delete_comment(id).await;
                    render(&page, term)?;
                }
            }
            "help" => term.write_line(HELP)?,
            "back" => return Ok(Exit::Back),
            "quit" | "exit" => return Ok(Exit::Quit),
            other => term.write_line(&format!("Unknown command: {} (try `help`)", other))?,
        }
    }
}

fn set_blog_field(page: &mut BlogPage, rest: &str, term: &Term) -> io::Result<()> {
    let (field, value) = split_command(rest);
    match page.page_mut().editing_mut() {
        Some(blog) => match field {
            "title" => blog.blog_title = value.to_string(),
            "body" => blog.blog_body = value.to_string(),
            _ => term.write_line("Editable fields: title, body")?,
        },
        None => term.write_line("Nothing is being edited. Use `edit <id>` first.")?,
    }
    Ok(())
}

fn render(page: &BlogPage, term: &Term) -> io::Result<()> {
    let visible = page.page().visible();
    if visible.is_empty() {
        term.write_line("No blogs found. Why not create the first one?")?;
        return Ok(());
    }
    for blog in visible {
        term.write_line(&format!(
            "#{:<4} {}",
            blog.id,
            style(&blog.blog_title).bold()
        ))?;
        term.write_line(&format!("      {}", blog.blog_body))?;
        if blog.comments.is_empty() {
            term.write_line(&style("      No comments yet.").dim().to_string())?;
        } else {
            term.write_line(&format!("      Comments ({}):", blog.comments.len()))?;
            for comment in &blog.comments {
                term.write_line(&format!("        [{}] {}", comment.id, comment.comment))?;
            }
        }
    }
    Ok(())
}

fn render_blog_modal(page: &BlogPage, term: &Term) -> io::Result<()> {
    if let Modal::Editing(blog) = page.page().modal() {
        term.write_line(&style("Edit Blog").bold().to_string())?;
        term.write_line(&format!("  Title: {}", blog.blog_title))?;
        term.write_line(&format!("  Body:  {}", blog.blog_body))?;
        term.write_line("Use `set title <value>` / `set body <value>`, then `save`.")?;
    }
    Ok(())
}

fn render_comment_modal(page: &BlogPage, term: &Term) -> io::Result<()> {
    if let Modal::Editing(comment) = page.comment_modal() {
        term.write_line(&style("Edit Comment").bold().to_string())?;
        term.write_line(&format!("  Text: {}", comment.comment))?;
        term.write_line("Use `comment-set <text>`, then `comment-save`.")?;
    }
    Ok(())
}
