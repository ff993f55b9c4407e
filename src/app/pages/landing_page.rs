/// Static landing blurb: the product pitch plus the two entry points.
pub fn render() -> String {
    [
        "MenuX - Modern QR Menus",
        "Launch digital menus in minutes. Engage customers. Get insights.",
        "Trusted by 1,000+ restaurants across India",
        "",
        "View Menu    -> menux",
        "Admin Access -> admin_console",
    ]
    .join("\n")
}
