//! Employees page: commands and card rendering.

use std::io;

use console::{style, Term};

use super::{parse_id, split_command, split_fields, Exit, Shell};
use crate::models::Employee;
use crate::pages::ResourcePage;
use crate::session::Modal;

const HELP: &str = "Commands:
  list                     show employees (filtered by the current search)
  search [term]            set or clear the name filter
  add <name> | <role>      add an employee
  view <id>                view one employee (fresh fetch)
  edit <id>                edit one employee (fresh fetch)
  set name|role <value>    change a field of the record being edited
  save                     save the edited record
  close                    dismiss the modal
  delete <id>              delete an employee (asks for confirmation)
  back | quit";

pub async fn run(shell: &Shell, term: &Term) -> io::Result<Exit> {
    let mut page: ResourcePage<Employee> = ResourcePage::new(
        shell.http.clone(),
        &shell.api_root,
        shell.notifier.clone(),
        shell.confirm.clone(),
    );

    term.write_line(&format!(
        "\n{}",
        style("Employee Management Portal").bold()
    ))?;
    page.load().await;
    render(&page, term)?;

    loop {
        let line = shell.prompt("employees")?;
        let (cmd, rest) = split_command(&line);
        match cmd {
            "" => continue,
            "list" => render(&page, term)?,
            "search" => {
                page.set_search(rest);
                render(&page, term)?;
            }
            "add" => {
                let (emp_name, emp_role) = split_fields(rest);
                let draft = page.draft_mut();
                draft.emp_name = emp_name;
                draft.emp_role = emp_role;
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

fn set_field(page: &mut ResourcePage<Employee>, rest: &str, term: &Term) -> io::Result<()> {
    let (field, value) = split_command(rest);
    match page.editing_mut() {
        Some(employee) => match field {
            "name" => employee.emp_name = value.to_string(),
            "role" => employee.emp_role = value.to_string(),
            _ => term.write_line("Editable fields: name, role")?,
        },
        None => term.write_line("Nothing is being edited. Use `edit <id>` first.")?,
    }
    Ok(())
}

fn render(page: &ResourcePage<Employee>, term: &Term) -> io::Result<()> {
    let visible = page.visible();
    if visible.is_empty() {
        if page.store().is_empty() {
            term.write_line("No employees found. Try adding a new employee.")?;
        } else {
            term.write_line("No employees found. Try clearing your search.")?;
        }
        return Ok(());
    }
    term.write_line(&format!(
        "{} of {} employees:",
        visible.len(),
        page.store().len()
    ))?;
    for employee in visible {
        term.write_line(&format!(
            "  #{:<4} {}  {}",
            employee.emp_id,
            style(&employee.emp_name).bold(),
            style(format!("({})", employee.emp_role)).dim(),
        ))?;
    }
    Ok(())
}

fn render_modal(page: &ResourcePage<Employee>, term: &Term) -> io::Result<()> {
    match page.modal() {
        Modal::Viewing(employee) => {
            term.write_line(&style("Employee Details").bold().to_string())?;
            term.write_line(&format!("  ID:   {}", employee.emp_id))?;
            term.write_line(&format!("  Name: {}", employee.emp_name))?;
            term.write_line(&format!("  Role: {}", employee.emp_role))?;
        }
        Modal::Editing(employee) => {
            term.write_line(&style("Edit Employee").bold().to_string())?;
            term.write_line(&format!("  Name: {}", employee.emp_name))?;
            term.write_line(&format!("  Role: {}", employee.emp_role))?;
            term.write_line("Use `set name <value>` / `set role <value>`, then `save`.")?;
        }
        Modal::Closed => {}
    }
    Ok(())
}
