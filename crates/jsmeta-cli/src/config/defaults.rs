pub fn default_extensions() -> Vec<String> {
    ["js", "mjs", "cjs", "jsx"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn default_output_suffix() -> String {
    jsmeta::DEFAULT_OUTPUT_SUFFIX.to_string()
}
