use chrono::Local;
use clap::Parser;
use log::debug;
use std::io::Read;
use std::str::FromStr;
use teachlog::application::status::status;
use teachlog::application::{
    clear_entries, init::init, list_classes, AddEntryRequest, AddEntryService, AdminSession,
    AttendanceChange, ClassService, ConfigService, DeleteEntryService, EditEntryRequest,
    EditEntryService, ExportService, ImportService, ListEntriesService, PinService,
};
use teachlog::cli::{
    confirm, format_class_list, format_entry_detail, format_entry_list, format_status,
    resolve_pin, ClassCommands, Cli, Commands, ExportCommands, PinCommands,
};
use teachlog::domain::DateStyle;
use teachlog::error::TeachlogError;
use teachlog::infrastructure::{FileSystemStore, KeyValueStore};

fn initialize_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    debug!("Logger initialized");
}

fn main() {
    initialize_logger();
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn unlock(
    store: &FileSystemStore,
    pin: Option<String>,
) -> Result<AdminSession<&FileSystemStore>, TeachlogError> {
    let entered = resolve_pin(pin)?;
    PinService::new(store).unlock(&entered)
}

fn run(cli: Cli) -> Result<(), TeachlogError> {
    match cli.command {
        Commands::Init { path, date_style } => {
            let style = DateStyle::from_str(&date_style).map_err(TeachlogError::Config)?;
            init(&path, style)?;
            println!("Initialized teachlog journal at {}", path.display());
            println!("Default admin PIN is 1007; change it with 'teachlog pin set'");
            Ok(())
        }
        Commands::Add {
            class,
            subject,
            note,
            attendance,
        } => {
            let store = FileSystemStore::discover()?;
            let config = store.load_config()?;
            let service = AddEntryService::new(&store, config.date_style);

            let entry = service.execute(
                AddEntryRequest {
                    class,
                    subject,
                    note,
                    record_attendance: attendance.attendance,
                    overrides: attendance.overrides(),
                },
                Local::now(),
            )?;

            println!("Saved entry {} ({})", entry.id, entry.date);
            if let Some(summary) = &entry.attendance_summary {
                println!("Attendance: {}", summary);
            }
            Ok(())
        }
        Commands::List { filter } => {
            let store = FileSystemStore::discover()?;
            let entries = ListEntriesService::new(&store).list(&filter.to_filter()?)?;
            print!("{}", format_entry_list(&entries));
            if entries.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Show { id } => {
            let store = FileSystemStore::discover()?;
            let entry = ListEntriesService::new(&store).show(id)?;
            let school = store.load_school()?;
            let roster = school.roster(&entry.class).unwrap_or_default();
            print!("{}", format_entry_detail(&entry, roster));
            Ok(())
        }
        Commands::Edit {
            id,
            class,
            subject,
            note,
            attendance,
            clear_attendance,
        } => {
            let store = FileSystemStore::discover()?;
            let change = if clear_attendance {
                AttendanceChange::Clear
            } else if attendance.requested() {
                AttendanceChange::Record(attendance.overrides())
            } else {
                AttendanceChange::Keep
            };

            let entry = EditEntryService::new(&store).execute(
                id,
                EditEntryRequest {
                    class,
                    subject,
                    note,
                    attendance: change,
                },
            )?;
            println!("Updated entry {}", entry.id);
            Ok(())
        }
        Commands::Delete { id } => {
            let store = FileSystemStore::discover()?;
            let removed = DeleteEntryService::new(&store).execute(id)?;
            println!("Deleted entry {} ({} - {})", removed.id, removed.class, removed.date);
            Ok(())
        }
        Commands::Clear { yes, pin } => {
            let store = FileSystemStore::discover()?;
            let session = unlock(&store, pin)?;
            let count = store.load_entries()?.len();

            if !confirm(&format!("Delete all {} entries?", count), yes)? {
                println!("Cancelled");
                return Ok(());
            }
            let removed = clear_entries(&session)?;
            println!("Deleted {} entries", removed);
            Ok(())
        }
        Commands::Class { command } => run_class(command),
        Commands::Export { command } => {
            let store = FileSystemStore::discover()?;
            let config = store.load_config()?;
            let service = ExportService::new(&store, config.resolve_export_dir(store.root()));
            let today = Local::now().date_naive();

            match command {
                ExportCommands::Csv { out, filter } => {
                    let summary =
                        service.export_csv(&filter.to_filter()?, out.as_deref(), today)?;
                    println!(
                        "Exported {} entries to {}",
                        summary.entry_count,
                        summary.path.display()
                    );
                }
                ExportCommands::Backup { out } => {
                    let summary = service.export_backup(out.as_deref(), today)?;
                    println!(
                        "Backed up {} entries to {}",
                        summary.entry_count,
                        summary.path.display()
                    );
                }
            }
            Ok(())
        }
        Commands::Import { file, yes, pin } => {
            let store = FileSystemStore::discover()?;
            let service = ImportService::new(unlock(&store, pin)?);
            let backup = service.read(&file)?;

            let question = format!(
                "Replace current data with {} entries and {} classes from {}?",
                backup.journals.len(),
                backup.school_data.len(),
                file.display()
            );
            if !confirm(&question, yes)? {
                println!("Cancelled");
                return Ok(());
            }

            let entries = backup.journals.len();
            service.apply(backup)?;
            println!("Restored {} entries from {}", entries, file.display());
            Ok(())
        }
        Commands::Pin { command } => {
            let store = FileSystemStore::discover()?;
            match command {
                PinCommands::Check { pin } => {
                    let entered = resolve_pin(pin)?;
                    if PinService::new(&store).check(&entered)? {
                        println!("Unlocked");
                        Ok(())
                    } else {
                        Err(TeachlogError::IncorrectPin)
                    }
                }
                PinCommands::Set { new_pin, pin } => {
                    unlock(&store, pin)?.change_pin(&new_pin)?;
                    println!("PIN updated");
                    Ok(())
                }
            }
        }
        Commands::Status => {
            let store = FileSystemStore::discover()?;
            let summary = status(&store, store.state_dir())?;
            print!("{}", format_status(&summary));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let store = FileSystemStore::discover()?;
            let service = ConfigService::new(store);

            if list {
                let config = service.list()?;
                println!("date_style = {}", config.date_style);
                println!("export_dir = {}", config.export_dir.display());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: teachlog config [--list | <key> [<value>]]");
                println!("Valid keys: date_style, export_dir");
                Ok(())
            }
        }
    }
}

fn run_class(command: ClassCommands) -> Result<(), TeachlogError> {
    let store = FileSystemStore::discover()?;

    match command {
        ClassCommands::Add { name, pin } => {
            ClassService::new(unlock(&store, pin)?).add(&name)?;
            println!("Added class {}", name.trim());
        }
        ClassCommands::Delete { name, pin } => {
            let removed = ClassService::new(unlock(&store, pin)?).delete(&name)?;
            println!(
                "Deleted class {} and its roster of {} students (entries kept)",
                name.trim(),
                removed.len()
            );
        }
        ClassCommands::Roster { name, file, pin } => {
            let service = ClassService::new(unlock(&store, pin)?);
            let text = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut text = String::new();
                    std::io::stdin().read_to_string(&mut text)?;
                    text
                }
            };
            let students = service.set_roster(&name, &text)?;
            println!("Saved roster of {} ({} students)", name.trim(), students.len());
        }
        ClassCommands::List => {
            print!("{}", format_class_list(&list_classes(&store)?));
            if store.load_school()?.is_empty() {
                println!();
            }
        }
    }
    Ok(())
}
