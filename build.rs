use std::{
    fs::{self, File},
    io,
    path::Path,
};

use clap::CommandFactory;

include!("src/cmd_handler.rs");

const BIN_NAME: &str = "plan-duplicate-checker";

fn main() {
    println!("cargo:rerun-if-changed=src/cmd_handler.rs");
    if let Err(err) = generate_completion() {
        println!("cargo:warning=failed to generate shell completions: {}", err);
    }
}

pub fn generate_completion() -> Result<(), io::Error> {
    let mut cmd = CmdArgs::command();

    let bash_dir = ".bash_completion.d";
    let zsh_dir = ".zfunc";
    if !Path::new(bash_dir).exists() {
        fs::create_dir_all(bash_dir)?;
    }
    if !Path::new(zsh_dir).exists() {
        fs::create_dir_all(zsh_dir)?;
    }

    let mut bash_file = File::create(format!("{}/{}.bash", bash_dir, BIN_NAME))?;
    let mut zsh_file = File::create(format!("{}/_{}", zsh_dir, BIN_NAME))?;

    clap_complete::generate(
        clap_complete::shells::Bash,
        &mut cmd,
        BIN_NAME,
        &mut bash_file,
    );
    clap_complete::generate(
        clap_complete::shells::Zsh,
        &mut cmd,
        BIN_NAME,
        &mut zsh_file,
    );
    Ok(())
}
