use crate::{EnvVarKind, Strategy, Tool, ToolFinder};

/// Environment variable consulted before the PATH lookup for `invocation`, e.g.
/// `GRAMGEN_ANTLR4_PATH` for `antlr4`. Setting it is a hard override: a bad path fails the search
/// rather than falling back to PATH.
pub fn override_var(invocation: &str) -> String {
    let mut var = String::from("GRAMGEN_");
    for c in invocation.chars() {
        if c.is_ascii_alphanumeric() {
            var.push(c.to_ascii_uppercase());
        } else {
            var.push('_');
        }
    }
    var.push_str("_PATH");
    var
}

pub fn find_invocation(invocation: &str) -> Result<Tool, String> {
    ToolFinder::new(invocation)
        .with_strategy(Strategy::EnvVar(
            override_var(invocation).into(),
            EnvVarKind::Hard,
        ))
        .with_strategy(Strategy::Which(invocation.into()))
        .find_tool()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_var_names() {
        assert_eq!(override_var("antlr4"), "GRAMGEN_ANTLR4_PATH");
        assert_eq!(override_var("my-tool"), "GRAMGEN_MY_TOOL_PATH");
    }
}
