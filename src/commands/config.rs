use crate::core::error::Result;
use crate::core::{print_detail, print_info, print_section_header, print_success, RepoConfig};

pub fn execute_config_set(username: String, repo: String, token: Option<String>) -> Result<()> {
    let config = RepoConfig::new(username, repo, token);
    config.save()?;
    print_success(&format!("Configured repository {}\n", config.slug()));
    Ok(())
}

pub fn execute_config_show() -> Result<()> {
    match RepoConfig::load()? {
        Some(config) => {
            print_section_header("Repository configuration");
            print_detail("Username", &config.username);
            print_detail("Repo", &config.repo);
            print_detail(
                "Token",
                if config.token.is_some() {
                    "(set)"
                } else {
                    "(not set)"
                },
            );
            println!();
        }
        None => {
            print_info("No repository configured yet. Run 'problem-rotator config set --username <user> --repo <repo>'");
        }
    }
    Ok(())
}
