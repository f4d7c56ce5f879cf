//! `babylog` - CLI for the babylog diary
//!
//! This binary opens the local diary store, imports legacy data on first
//! launch, and exposes the diary operations as subcommands.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::Parser;

use babylog::achievements::{category_levels, is_locked, overall_level, timeline};
use babylog::cli::{
    Cli, Command, ConfigCommand, EntryCommand, ExportCommand, MigrateCommand, MilestoneCommand,
    OnboardCommand, PhotoCommand, StatusCommand, VaccineCommand,
};
use babylog::diary::{DiaryOptions, Upload};
use babylog::export::{export_file_name, write_milestones_csv};
use babylog::onboarding::month_age;
use babylog::vaccinations::schedule;
use babylog::{
    init_logging, migrate_legacy_file, Catalog, Config, Diary, DiaryEntry, LogNotifier,
    MigrationOutcome, SqliteStore, UserProfile,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    let today = Local::now().date_naive();

    match cli.command {
        Command::Config(cmd) => handle_config(&config, cmd),
        Command::Export(cmd) => handle_export(&cmd, today),
        Command::Migrate(cmd) => {
            config.validate()?;
            handle_migrate(&config, cmd, today).await
        }
        Command::Status(cmd) => {
            config.validate()?;
            let store = Arc::new(open_store(&config)?);
            let diary = open_diary(&config, Arc::clone(&store), today).await;
            handle_status(&diary, &store, &cmd, today)
        }
        Command::Onboard(cmd) => {
            let mut diary = open_for_update(&config, today).await?;
            let result = handle_onboard(&mut diary, cmd, today);
            finish(diary, result).await
        }
        Command::Entry(cmd) => {
            let mut diary = open_for_update(&config, today).await?;
            let result = handle_entry(&mut diary, cmd);
            finish(diary, result).await
        }
        Command::Vaccine(cmd) => {
            let mut diary = open_for_update(&config, today).await?;
            let result = handle_vaccine(&mut diary, cmd, today);
            finish(diary, result).await
        }
        Command::Milestone(cmd) => {
            let mut diary = open_for_update(&config, today).await?;
            let result = handle_milestone(&mut diary, cmd, today);
            finish(diary, result).await
        }
        Command::Photo(cmd) => {
            let mut diary = open_for_update(&config, today).await?;
            let result = handle_photo(&mut diary, cmd).await;
            finish(diary, result).await
        }
    }
}

async fn open_for_update(config: &Config, today: NaiveDate) -> anyhow::Result<Diary> {
    config.validate()?;
    let store = Arc::new(open_store(config)?);
    Ok(open_diary(config, store, today).await)
}

/// Write pending changes, including those made before `result` failed.
async fn finish(diary: Diary, result: anyhow::Result<()>) -> anyhow::Result<()> {
    diary.flush().await.context("failed to save the diary")?;
    result
}

fn open_store(config: &Config) -> anyhow::Result<SqliteStore> {
    let path = config.database_path();
    SqliteStore::open(&path).with_context(|| format!("cannot open diary at {}", path.display()))
}

async fn open_diary(
    config: &Config,
    store: Arc<SqliteStore>,
    today: NaiveDate,
) -> Diary {
    let catalog = Catalog::builtin();
    // Import problems are logged and never stop the diary from opening.
    if let Some(path) = config.legacy_path() {
        migrate_legacy_file(store.as_ref(), &path, &catalog, today).await;
    }
    Diary::open(
        store,
        Arc::new(LogNotifier),
        catalog,
        DiaryOptions::from(config),
        None,
        today,
    )
    .await
}

fn handle_status(
    diary: &Diary,
    store: &SqliteStore,
    cmd: &StatusCommand,
    today: NaiveDate,
) -> anyhow::Result<()> {
    let stats = store.stats()?;
    let state = diary.state();
    let levels = category_levels(&diary.achievements(), diary.catalog());
    let overall = overall_level(&levels);
    let vaccinations = state
        .profile
        .as_ref()
        .map(|p| schedule(state, diary.catalog(), p.birth_date).progress());

    if cmd.json {
        let status = serde_json::json!({
            "database_path": store.path(),
            "database_bytes": stats.db_size_bytes,
            "profile": state.profile,
            "month_age": state.profile.as_ref().map(|p| month_age(p.birth_date, today)),
            "entries": stats.entries,
            "vaccinations": vaccinations.map(|(done, total)| serde_json::json!({"done": done, "total": total})),
            "achievements": diary.achievements().len(),
            "overall_level": overall,
            "photos": stats.photos,
            "photo_bytes": stats.photo_bytes,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("babylog status");
    println!("--------------");
    match &state.profile {
        Some(profile) => {
            println!(
                "Baby:          {} ({} months)",
                profile.name,
                month_age(profile.birth_date, today)
            );
            println!("Born:          {}", profile.birth_date);
            if profile.reminders_enabled() {
                println!("Reminder:      {}", profile.notification_time);
            } else {
                println!("Reminder:      off");
            }
        }
        None => println!("Baby:          not set up (run `babylog onboard`)"),
    }
    println!("Entries:       {}", stats.entries);
    if let Some((done, total)) = vaccinations {
        println!("Vaccinations:  {done}/{total}");
    }
    println!("Milestones:    {}", diary.achievements().len());
    println!("Overall level: {overall:.1} months");
    println!("Photos:        {} ({} bytes)", stats.photos, stats.photo_bytes);
    println!("Database:      {} ({} bytes)", store.path().display(), stats.db_size_bytes);
    Ok(())
}

async fn handle_migrate(config: &Config, cmd: MigrateCommand, today: NaiveDate) -> anyhow::Result<()> {
    let Some(path) = cmd.legacy.or_else(|| config.legacy_path()) else {
        println!("Legacy import is disabled.");
        return Ok(());
    };
    let store = open_store(config)?;

    match migrate_legacy_file(&store, &path, &Catalog::builtin(), today).await {
        MigrationOutcome::AlreadyMigrated => println!("Legacy data was already imported."),
        MigrationOutcome::NothingToMigrate => {
            println!("No legacy data found at {}.", path.display());
        }
        MigrationOutcome::Migrated(report) => {
            println!("Imported legacy data from {}:", path.display());
            println!("  Profile:      {}", if report.profile { "yes" } else { "no" });
            println!("  Entries:      {}", report.entries);
            println!("  Vaccinations: {}", report.vaccinations);
            println!("  Milestones:   {}", report.milestones);
            println!("  Photos:       {}", report.photos);
            if report.dropped_images > 0 || report.dropped_records > 0 {
                println!(
                    "  Dropped:      {} images, {} records",
                    report.dropped_images, report.dropped_records
                );
            }
        }
        MigrationOutcome::Failed(reason) => bail!("legacy import failed: {reason}"),
    }
    Ok(())
}

fn handle_onboard(diary: &mut Diary, cmd: OnboardCommand, today: NaiveDate) -> anyhow::Result<()> {
    if diary.state().is_onboarded() {
        let name = diary.state().profile.as_ref().map_or("", |p| p.name.as_str());
        bail!("the diary is already set up for {name}");
    }
    if cmd.name.trim().is_empty() {
        bail!("the baby's name cannot be empty");
    }
    if cmd.birth_date > today {
        bail!("birth date {} is in the future", cmd.birth_date);
    }
    if !cmd.no_reminder {
        NaiveTime::parse_from_str(&cmd.reminder, "%H:%M")
            .with_context(|| format!("invalid reminder time '{}', expected HH:MM", cmd.reminder))?;
    }

    let plan = diary.onboarding_plan(cmd.birth_date, today);
    let profile = UserProfile {
        name: cmd.name.trim().to_string(),
        birth_date: cmd.birth_date,
        notification_time: cmd.reminder,
    };
    let result = plan.complete(diary.catalog(), profile, &cmd.checked, !cmd.no_reminder);
    println!(
        "Welcome, {}! {} months old: {} milestones and {} vaccinations recorded.",
        result.profile.name,
        plan.month_age,
        result.milestones.len(),
        result.vaccinations.len()
    );
    diary.complete_onboarding(result);

    let unchecked: Vec<_> = plan
        .visible_milestones
        .iter()
        .filter(|m| !cmd.checked.iter().any(|id| id == m.id))
        .collect();
    if !unchecked.is_empty() {
        println!();
        println!("Milestones around this age (record with `babylog milestone record <ID>`):");
        for milestone in unchecked {
            println!("  {:<28} {}", milestone.id, milestone.title);
        }
    }
    Ok(())
}

fn handle_entry(diary: &mut Diary, cmd: EntryCommand) -> anyhow::Result<()> {
    match cmd {
        EntryCommand::List => {
            let entries = &diary.state().entries;
            if entries.is_empty() {
                println!("No entries yet.");
            }
            for entry in entries.values().rev() {
                let summary = entry.content.lines().next().unwrap_or("");
                println!(
                    "{}  {:<9}  {} skills  {} photos  {}",
                    entry.date,
                    entry.mood,
                    entry.skills.len(),
                    entry.images.len(),
                    summary
                );
            }
        }
        EntryCommand::Show { date } => {
            let Some(entry) = diary.state().entry(date) else {
                bail!("no entry for {date}");
            };
            print_entry(entry);
        }
        EntryCommand::Write {
            date,
            mood,
            text,
            skills,
            removed_skills,
            height,
            weight,
        } => {
            let mut entry = diary
                .state()
                .entry(date)
                .cloned()
                .unwrap_or_else(|| DiaryEntry::new(date));
            if let Some(mood) = mood {
                entry.mood = mood;
            }
            if let Some(text) = text {
                entry.content = text;
            }
            for skill in &removed_skills {
                if !entry.remove_skill(skill) {
                    println!("'{skill}' is not listed on {date}.");
                }
            }
            for skill in skills {
                entry.add_skill(skill);
            }
            if height.is_some() {
                entry.height = height;
            }
            if weight.is_some() {
                entry.weight = weight;
            }
            print_entry(&entry);
            diary.save_entry(entry);
        }
    }
    Ok(())
}

fn print_entry(entry: &DiaryEntry) {
    println!("{} ({})", entry.date, entry.mood);
    if let Some(height) = entry.height {
        println!("  Height: {height} cm");
    }
    if let Some(weight) = entry.weight {
        println!("  Weight: {weight} kg");
    }
    for skill in &entry.skills {
        println!("  * {skill}");
    }
    if !entry.images.is_empty() {
        println!("  Photos: {}", entry.images.join(", "));
    }
    if !entry.content.is_empty() {
        println!();
        println!("{}", entry.content);
    }
}

fn handle_vaccine(diary: &mut Diary, cmd: VaccineCommand, today: NaiveDate) -> anyhow::Result<()> {
    let Some(birth) = diary.state().profile.as_ref().map(|p| p.birth_date) else {
        bail!("the diary is not set up yet; run `babylog onboard` first");
    };

    match cmd {
        VaccineCommand::List { todo } => {
            let schedule = schedule(diary.state(), diary.catalog(), birth);
            let (done, total) = schedule.progress();
            println!("Vaccinations: {done}/{total} ({}%)", schedule.percent());
            for status in schedule.items().iter().filter(|s| !todo || !s.is_done()) {
                let v = status.vaccination;
                let mark = match status.completed {
                    Some(date) => format!("given {date}"),
                    None if status.is_overdue(today) => format!("OVERDUE since {}", status.due),
                    None => format!("due {}", status.due),
                };
                println!(
                    "  {:<10} {} #{:<2} {}",
                    v.id, v.disease, v.dose_number, mark
                );
            }
        }
        VaccineCommand::Done { id, date } => {
            if let Some(given) = diary.state().vaccination(&id) {
                println!("{id} was already given on {}.", given.date);
                return Ok(());
            }
            let date = date.unwrap_or(today);
            if diary.toggle_vaccination(&id, date).is_none() {
                bail!("unknown vaccination '{id}'");
            }
            println!("Recorded {id} on {date}.");
        }
        VaccineCommand::Undo { id } => {
            if diary.state().vaccination(&id).is_none() {
                println!("{id} is not recorded.");
                return Ok(());
            }
            if diary.toggle_vaccination(&id, today) == Some(false) {
                println!("Removed {id}.");
            }
        }
    }
    Ok(())
}

fn handle_milestone(diary: &mut Diary, cmd: MilestoneCommand, today: NaiveDate) -> anyhow::Result<()> {
    match cmd {
        MilestoneCommand::List { category } => {
            let map = diary.achievements();
            let categories = category.map_or_else(|| diary.catalog().categories().to_vec(), |c| vec![c]);
            for category in categories {
                println!("[{category}]");
                for milestone in diary.catalog().milestones_in(category) {
                    let status = match map.get(milestone.id) {
                        Some(a) => match a.date {
                            Some(date) if a.is_editable() => format!("done {date}"),
                            Some(date) => format!("diary {date}"),
                            None => "done".to_string(),
                        },
                        None if is_locked(&map, milestone) => "locked".to_string(),
                        None => String::new(),
                    };
                    println!(
                        "  {:<28} {:>2}-{:<2} {:<14} {}",
                        milestone.id, milestone.month_from, milestone.month_to, status, milestone.title
                    );
                }
            }
        }
        MilestoneCommand::Record { id, date } => {
            let date = date.unwrap_or(today);
            if diary.record_milestone(&id, date)? {
                println!("Recorded {id} on {date}.");
            } else if diary.catalog().milestone(&id).is_none() {
                bail!("unknown milestone '{id}'");
            } else {
                println!("{id} is already recorded on {date}.");
            }
        }
        MilestoneCommand::Clear { id } => {
            if diary.clear_milestone(&id)? {
                println!("Cleared {id}.");
            } else {
                println!("{id} is not recorded.");
            }
        }
        MilestoneCommand::Levels => {
            let map = diary.achievements();
            let levels = category_levels(&map, diary.catalog());
            for (category, level) in &levels {
                println!("  {category:<12} {level:>2} months");
            }
            println!("  {:<12} {:>4.1} months", "overall", overall_level(&levels));

            let recent = timeline(&map, diary.catalog());
            if !recent.is_empty() {
                println!();
                println!("Recent:");
                for (milestone, date, _) in recent.into_iter().take(5) {
                    println!("  {date}  {}", milestone.title);
                }
            }
        }
    }
    Ok(())
}

async fn handle_photo(diary: &mut Diary, cmd: PhotoCommand) -> anyhow::Result<()> {
    match cmd {
        PhotoCommand::Add { date, files } => {
            let mut uploads = Vec::with_capacity(files.len());
            for path in files {
                let bytes = tokio::fs::read(&path)
                    .await
                    .with_context(|| format!("cannot read {}", path.display()))?;
                uploads.push(Upload {
                    name: display_name(&path),
                    bytes,
                });
            }
            let requested = uploads.len();
            let ids = diary.attach_photos(date, uploads).await?;
            println!("Attached {} of {requested} photos to {date}.", ids.len());
            for id in ids {
                println!("  {id}");
            }
        }
        PhotoCommand::List { date } => {
            let previews = diary.previews(date).await?;
            if previews.is_empty() {
                println!("No photos for {date}.");
            }
            for preview in previews.iter() {
                println!(
                    "  {}  {}x{}  {}  {} bytes",
                    preview.id,
                    preview.width,
                    preview.height,
                    preview.mime,
                    preview.bytes().len()
                );
            }
        }
        PhotoCommand::Delete { date, id } => {
            if diary.remove_photo(date, &id).await? {
                println!("Deleted {id}.");
            } else {
                println!("No photo {id} on {date}.");
            }
        }
    }
    Ok(())
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

fn handle_export(cmd: &ExportCommand, today: NaiveDate) -> anyhow::Result<()> {
    let path = cmd
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(export_file_name(today)));
    write_milestones_csv(&path, Catalog::builtin().milestones())?;
    println!("Exported milestones to {}", path.display());
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:   {}", config.database_path().display());
                println!();
                println!("[Legacy]");
                match config.legacy_path() {
                    Some(path) => println!("  Import path:     {}", path.display()),
                    None => println!("  Import:          disabled"),
                }
                println!();
                println!("[Photos]");
                println!("  Max long side:   {}", config.photos.max_long_side);
                println!("  Quality:         {}", config.photos.quality);
                println!("  Max per entry:   {}", config.photos.max_per_entry);
                println!();
                println!("[Autosave]");
                println!("  Debounce (ms):   {}", config.autosave.debounce_ms);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)).and_then(|c| c.validate().map(|()| c)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
