//! Every user-facing string in one place.

pub struct UiText {
    pub app_title: &'static str,
    pub app_title_accent: &'static str,
    pub login_tagline: &'static str,
    pub signup_tagline: &'static str,

    // --- Navigation ---
    pub nav_dashboard: &'static str,
    pub nav_history: &'static str,
    pub nav_subscribe: &'static str,
    pub nav_profile: &'static str,
    pub nav_connect: &'static str,
    pub nav_logout: &'static str,
    pub nav_version: &'static str,

    // --- Forms ---
    pub hint_username: &'static str,
    pub hint_fullname: &'static str,
    pub hint_email: &'static str,
    pub hint_password: &'static str,
    pub btn_sign_in: &'static str,
    pub btn_sign_in_busy: &'static str,
    pub btn_sign_up: &'static str,
    pub btn_sign_up_busy: &'static str,
    pub login_no_account: &'static str,
    pub login_signup_link: &'static str,
    pub signup_has_account: &'static str,
    pub signup_login_link: &'static str,
    pub signup_success: &'static str,

    // --- Dashboard / history ---
    pub welcome_title: &'static str,
    pub fallback_username: &'static str,
    pub fallback_server: &'static str,
    pub masked_password: &'static str,
    pub label_trade_server: &'static str,
    pub label_username: &'static str,
    pub label_password: &'static str,
    pub trade_history_title: &'static str,
    pub loading_trades: &'static str,
    pub no_trades: &'static str,
    pub view_all: &'static str,
    pub badge_subscribed: &'static str,
    pub badge_inactive: &'static str,
    pub btn_prev: &'static str,
    pub btn_next: &'static str,

    // --- Ticker ---
    pub ticker_title: &'static str,

    // --- Profile ---
    pub profile_title: &'static str,
    pub label_email: &'static str,
    pub label_date_joined: &'static str,
    pub label_subscription: &'static str,
    pub btn_edit_profile: &'static str,
    pub btn_save_changes: &'static str,
    pub btn_cancel: &'static str,
    pub change_password_title: &'static str,
    pub hint_new_password: &'static str,
    pub btn_change_password: &'static str,
    pub password_changed: &'static str,

    // --- Subscribe ---
    pub premium_title: &'static str,
    pub premium_pitch: &'static str,
    pub btn_subscribe: &'static str,
    pub payment_title: &'static str,
    pub payment_hint: &'static str,
    pub label_account_name: &'static str,
    pub label_account_number: &'static str,
    pub label_bank_name: &'static str,
    pub btn_paid: &'static str,
    pub paid_confirmation: &'static str,

    // --- Connect ---
    pub trading_details_title: &'static str,
    pub not_set: &'static str,
    pub btn_add_details: &'static str,
    pub modal_details_title: &'static str,
    pub btn_connect: &'static str,

    pub loading: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "ZenTrader",
    app_title_accent: " Pro",
    login_tagline: "Making you money while you sleep",
    signup_tagline: "Create your AI-powered trading account",

    nav_dashboard: "Dashboard",
    nav_history: "Trade-History",
    nav_subscribe: "Subscribe",
    nav_profile: "Profile",
    nav_connect: "Connect Trade Account",
    nav_logout: "Logout",
    nav_version: "v1.0",

    hint_username: "Enter your username",
    hint_fullname: "Enter your full name",
    hint_email: "Enter your email",
    hint_password: "Enter your password",
    btn_sign_in: "Sign In",
    btn_sign_in_busy: "Signing In...",
    btn_sign_up: "Sign Up",
    btn_sign_up_busy: "Signing Up...",
    login_no_account: "Don't have an account?",
    login_signup_link: "Sign up",
    signup_has_account: "Already have an account?",
    signup_login_link: "Login",
    signup_success: "User signed up successfully, Kindly Login!",

    welcome_title: "Welcome",
    fallback_username: "ZenTraderUser",
    fallback_server: "server01.zentrader.com",
    masked_password: "••••••••",
    label_trade_server: "Trade Server",
    label_username: "Username",
    label_password: "Password",
    trade_history_title: "Trade History",
    loading_trades: "Loading trades...",
    no_trades: "No trades available.",
    view_all: "View All →",
    badge_subscribed: "Subscribed",
    badge_inactive: "Inactive",
    btn_prev: "Prev",
    btn_next: "Next",

    ticker_title: "Currency Pairs",

    profile_title: "Profile",
    label_email: "Email",
    label_date_joined: "Date Joined",
    label_subscription: "Subscription Status",
    btn_edit_profile: "Edit Profile",
    btn_save_changes: "Save Changes",
    btn_cancel: "Cancel",
    change_password_title: "Change Password",
    hint_new_password: "New password",
    btn_change_password: "Change Password",
    password_changed: "Password updated.",

    premium_title: "ZenTrader Premium",
    premium_pitch: "Unlock all features and start trading like a pro.",
    btn_subscribe: "Subscribe Now",
    payment_title: "Payment Instructions",
    payment_hint: "Once payment has been made, click \"Paid\"",
    label_account_name: "Account Name",
    label_account_number: "Account Number",
    label_bank_name: "Bank Name",
    btn_paid: "Paid ✓",
    paid_confirmation: "Your subscription will be updated shortly.",

    trading_details_title: "Trading Details",
    not_set: "Not set",
    btn_add_details: "Add Trading Details",
    modal_details_title: "Change Trading Details",
    btn_connect: "Connect",

    loading: "Loading...",
};
