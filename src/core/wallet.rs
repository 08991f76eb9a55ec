//! Injected wallet provider access using web-sys.
//!
//! Talks to the EIP-1193 provider at `window.ethereum` through the Reflect
//! API. Connection state itself lives in the app context; this module only
//! issues requests and forwards provider events.

use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::JsFuture;

use crate::config::{WALLET_SESSION_KEY, WALLET_TIMEOUT_MS};
use crate::core::Chain;
use crate::core::error::WalletError;
use crate::utils::{RaceResult, dom, log, race_with_timeout};

/// Get the window.ethereum object injected by the wallet extension.
fn get_ethereum() -> Result<Object, WalletError> {
    let window = dom::window().ok_or(WalletError::NoWindow)?;
    Reflect::get(&window, &"ethereum".into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(WalletError::NotInstalled)
}

/// Build `ethereum.request({ method, params })` without awaiting it.
fn request_promise(method: &str, params: Option<&Array>) -> Result<Promise, WalletError> {
    let ethereum = get_ethereum()?;

    let args = Object::new();
    Reflect::set(&args, &"method".into(), &method.into())
        .map_err(|_| WalletError::RequestCreationFailed)?;
    if let Some(params) = params {
        Reflect::set(&args, &"params".into(), params)
            .map_err(|_| WalletError::RequestCreationFailed)?;
    }

    let request = Reflect::get(&ethereum, &"request".into())
        .map_err(|_| WalletError::RequestCreationFailed)?
        .dyn_into::<Function>()
        .map_err(|_| WalletError::RequestCreationFailed)?;

    Ok(request
        .call1(&ethereum, &args)
        .map_err(|_| WalletError::RequestCreationFailed)?
        .into())
}

async fn ethereum_request(method: &str, params: Option<&Array>) -> Result<JsValue, WalletError> {
    let promise = request_promise(method, params)?;
    JsFuture::from(promise)
        .await
        .map_err(|e| WalletError::RequestRejected(format!("{:?}", e)))
}

/// Parse a `0x`-prefixed hex chain id.
pub fn parse_chain_id(hex: &str) -> Option<u64> {
    u64::from_str_radix(hex.trim_start_matches("0x"), 16).ok()
}

/// Check if an injected wallet is available
pub fn is_available() -> bool {
    get_ethereum().is_ok()
}

/// Get current chain ID
pub async fn get_chain_id() -> Option<u64> {
    let result = ethereum_request("eth_chainId", None).await.ok()?;
    parse_chain_id(&result.as_string()?)
}

/// Request wallet connection (shows the wallet popup)
pub async fn connect() -> Result<String, WalletError> {
    let result = ethereum_request("eth_requestAccounts", None).await?;
    let accounts = Array::from(&result);

    accounts.get(0).as_string().ok_or(WalletError::NoAccount)
}

/// Get currently connected account (no popup) with timeout
pub async fn get_account() -> Option<String> {
    let promise = request_promise("eth_accounts", None).ok()?;

    match race_with_timeout(promise, WALLET_TIMEOUT_MS).await {
        RaceResult::Completed(result) => Array::from(&result).get(0).as_string(),
        RaceResult::TimedOut => None,
        RaceResult::Error(e) => {
            log::warn(&format!("eth_accounts failed: {}", e));
            None
        }
    }
}

/// Ask the provider to switch networks.
///
/// The provider owns the switch; success is observed through
/// [`on_chain_changed`].
pub async fn switch_chain(chain: Chain) -> Result<(), WalletError> {
    let param = Object::new();
    Reflect::set(&param, &"chainId".into(), &chain.hex_id().into())
        .map_err(|_| WalletError::RequestCreationFailed)?;
    let params = Array::of1(&param);

    ethereum_request("wallet_switchEthereumChain", Some(&params)).await?;
    Ok(())
}

/// Check if user has previously connected (localStorage flag).
pub fn has_session() -> bool {
    dom::local_storage()
        .and_then(|s| s.get_item(WALLET_SESSION_KEY).ok().flatten())
        .is_some()
}

/// Save connection session to localStorage.
pub fn save_session() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.set_item(WALLET_SESSION_KEY, "1");
    }
}

/// Clear connection session from localStorage.
pub fn clear_session() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.remove_item(WALLET_SESSION_KEY);
    }
}

// ============================================================================
// Event Listeners
// ============================================================================

fn subscribe(event: &str, handler: &JsValue) -> Result<(), WalletError> {
    let ethereum = get_ethereum()?;

    let on_fn = Reflect::get(&ethereum, &"on".into())
        .map_err(|_| WalletError::RequestCreationFailed)?
        .dyn_into::<Function>()
        .map_err(|_| WalletError::RequestCreationFailed)?;

    on_fn
        .call2(&ethereum, &event.into(), handler)
        .map_err(|_| WalletError::RequestCreationFailed)?;
    Ok(())
}

/// Register a callback for when the connected account changes.
///
/// The callback receives `Some(address)` when an account is connected,
/// or `None` when disconnected. The closure is leaked; listeners live for
/// the whole page.
pub fn on_accounts_changed(callback: impl Fn(Option<String>) + 'static) -> Result<(), WalletError> {
    let closure = Closure::wrap(Box::new(move |accounts: JsValue| {
        let account = Array::from(&accounts).get(0).as_string();
        callback(account);
    }) as Box<dyn Fn(JsValue)>);

    subscribe("accountsChanged", closure.as_ref())?;
    closure.forget();
    Ok(())
}

/// Register a callback for when the connected chain changes.
///
/// The callback receives the parsed chain id, or `None` if the provider
/// sent something unparseable.
pub fn on_chain_changed(callback: impl Fn(Option<u64>) + 'static) -> Result<(), WalletError> {
    let closure = Closure::wrap(Box::new(move |chain_id: JsValue| {
        callback(chain_id.as_string().as_deref().and_then(parse_chain_id));
    }) as Box<dyn Fn(JsValue)>);

    subscribe("chainChanged", closure.as_ref())?;
    closure.forget();
    Ok(())
}
