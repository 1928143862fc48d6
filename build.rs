use std::io;

fn main() -> io::Result<()> {
    // Only compile resources on Windows
    #[cfg(windows)]
    {
        let mut res = winresource::WindowsResource::new();

        res.set("ProductName", "User Portal");
        res.set("FileDescription", "User Portal - Profile Widgets Showcase");
        res.set("CompanyName", "Mukul9897");
        res.set("LegalCopyright", "Copyright (C) 2026 Mukul Sharma");

        res.compile()?;
    }

    Ok(())
}
