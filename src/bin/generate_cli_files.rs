// Renders the man page and shell completions for `mice-input`.
use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator, Shell};
use clap_complete_nushell::Nushell;
use clap_mangen::Man;
use mice_input::cli::Args;
use std::{env, fs, io::Error, path::Path};

const BIN_NAME: &str = "mice-input";

fn write_completion<G: Generator>(generator: G, cmd: &Command, out_path: &Path, ext: &str) -> Result<(), Error> {
    let path = out_path.join(format!("{BIN_NAME}.{ext}"));
    println!("Generating completion file: {path:?}");
    let mut file = fs::File::create(&path)?;
    generate(generator, &mut cmd.clone(), BIN_NAME, &mut file);
    Ok(())
}

fn main() -> Result<(), Error> {
    // OUT_DIR when run from a build, target/generated otherwise.
    let outdir = env::var_os("OUT_DIR").unwrap_or_else(|| "target/generated".into());
    let out_path = Path::new(&outdir);
    fs::create_dir_all(out_path)?;

    let cmd = Args::command().name(BIN_NAME);

    let man_path = out_path.join(format!("{BIN_NAME}.1"));
    println!("Generating man page: {man_path:?}");
    let mut man_file = fs::File::create(&man_path)?;
    Man::new(cmd.clone()).render(&mut man_file)?;

    for (shell, ext) in [
        (Shell::Bash, "bash"),
        (Shell::Elvish, "elv"),
        (Shell::Fish, "fish"),
        (Shell::PowerShell, "ps1"),
        (Shell::Zsh, "zsh"),
    ] {
        write_completion(shell, &cmd, out_path, ext)?;
    }
    write_completion(Nushell, &cmd, out_path, "nu")?;

    println!(
        "Successfully generated man page and completions in: {}",
        out_path.display()
    );
    Ok(())
}
