//! Students page: commands and card rendering.

use std::io;

use console::{style, Term};

use super::{parse_id, split_command, split_fields, Exit, Shell};
use crate::models::Student;
use crate::pages::ResourcePage;
use crate::session::Modal;

const HELP: &str = "Commands:
  list                     show students (filtered by the current search)
  search [term]            set or clear the name filter
  add <name> | <branch>    add a student
  view <id>                view one student (fresh fetch)
  edit <id>                edit one student (fresh fetch)
  set name|branch <value>  change a field of the record being edited
  save                     save the edited record
  close                    dismiss the modal
  delete <id>              delete a student (asks for confirmation)
  back | quit";

pub async fn run(shell: &Shell, term: &Term) -> io::Result<Exit> {
    let mut page: ResourcePage<Student> = ResourcePage::new(
        shell.http.clone(),
        &shell.api_root,
        shell.notifier.clone(),
        shell.confirm.clone(),
    );

    term.write_line(&format!(
        "\n{}",
        style("Student Management Portal").bold()
    ))?;
    page.load().await;
    render(&page, term)?;

    loop {
        let line = shell.prompt("students")?;
        let (cmd, rest) = split_command(&line);
        match cmd {
            "" => continue,
            "list" => render(&page, term)?,
            "search" => {
                page.set_search(rest);
                render(&page, term)?;
            }
            "add" => {
                let (name, branch) = split_fields(rest);
                let draft = page.draft_mut();
                draft.name = name;
                draft.branch = branch;
                page.submit_draft().await;
                render(&page, term)?;
            }
            "view" => {
                if let Some(id) = parse_id(term, rest)? {
                    page.open_view(id).await;
                    render_modal(&page, term)?;
                }
            }
            "edit" => {
                if let Some(id) = parse_id(term, rest)? {
                    page.open_edit(id).await;
                    render_modal(&page, term)?;
                }
            }
            "set" => {
                set_field(&mut page, rest, term)?;
            }
            "save" => {
                page.save().await;
                render(&page, term)?;
            }
            "close" => page.dismiss(),
            "delete" => {
                if let Some(id) = parse_id(term, rest)? {
                    page.delete(id).await;
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

fn set_field(page: &mut ResourcePage<Student>, rest: &str, term: &Term) -> io::Result<()> {
    let (field, value) = split_command(rest);
    match page.editing_mut() {
        Some(student) => match field {
            "name" => student.name = value.to_string(),
            "branch" => student.branch = value.to_string(),
            _ => term.write_line("Editable fields: name, branch")?,
        },
        None => term.write_line("Nothing is being edited. Use `edit <id>` first.")?,
    }
    Ok(())
}

fn render(page: &ResourcePage<Student>, term: &Term) -> io::Result<()> {
    let visible = page.visible();
    if visible.is_empty() {
        if page.store().is_empty() {
            term.write_line("No students found. Try adding a new student.")?;
        } else {
            term.write_line("No students found. Try clearing your search.")?;
        }
        return Ok(());
    }
    term.write_line(&format!(
        "{} of {} students:",
        visible.len(),
        page.store().len()
    ))?;
    for student in visible {
        term.write_line(&format!(
            "  #{:<4} {}  {}",
            student.student_id,
            style(&student.name).bold(),
            style(format!("({})", student.branch)).dim(),
        ))?;
    }
    Ok(())
}

fn render_modal(page: &ResourcePage<Student>, term: &Term) -> io::Result<()> {
    match page.modal() {
        Modal::Viewing(student) => {
            term.write_line(&style("Student Details").bold().to_string())?;
            term.write_line(&format!("  ID:     {}", student.student_id))?;
            term.write_line(&format!("  Name:   {}", student.name))?;
            term.write_line(&format!("  Branch: {}", student.branch))?;
        }
        Modal::Editing(student) => {
            term.write_line(&style("Edit Student").bold().to_string())?;
            term.write_line(&format!("  Name:   {}", student.name))?;
            term.write_line(&format!("  Branch: {}", student.branch))?;
            term.write_line("Use `set name <value>` / `set branch <value>`, then `save`.")?;
        }
        Modal::Closed => {}
    }
    Ok(())
}
