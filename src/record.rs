/// One row of the kernel's loaded-module table.
#[derive(Debug, Clone)]
pub struct ModuleRecord {
    pub name: String,
    pub size: u64,
    pub user_count: u64,
    /// Comma-joined dependent modules, or the `-` placeholder.
    pub users: String,
    pub status: String,    // parsed, never displayed
    pub load_address: u64, // parsed, never displayed
}

impl ModuleRecord {
    /// Parse one line of the form `name size user_count users status 0xaddr`.
    ///
    /// The line must tokenize into exactly six whitespace-delimited fields,
    /// with decimal `size` and `user_count` and a mandatory `0x` prefix on
    /// the load address. Anything else is a shape mismatch and yields `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let name = fields.next()?;
        let size = fields.next()?.parse().ok()?;
        let user_count = fields.next()?.parse().ok()?;
        let users = fields.next()?;
        let status = fields.next()?;
        let addr = fields.next()?.strip_prefix("0x")?;
        if fields.next().is_some() {
            return None;
        }
        let load_address = u64::from_str_radix(addr, 16).ok()?;
        Some(Self {
            name: name.to_string(),
            size,
            user_count,
            users: users.to_string(),
            status: status.to_string(),
            load_address,
        })
    }
}
