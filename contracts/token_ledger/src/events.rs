use soroban_sdk::{log, symbol_short, Address, Env};

pub(crate) fn initialized(env: &Env, admin: &Address, total_supply: i128) {
    let topics = (symbol_short!("init"), admin.clone());
    env.events().publish(topics, total_supply);
    log!(env, "ledger initialised", admin.clone(), total_supply);
}

pub(crate) fn minted(env: &Env, admin: &Address, amount: i128, total_supply: i128) {
    let topics = (symbol_short!("mint"), admin.clone());
    env.events().publish(topics, amount);
    log!(env, "minted", admin.clone(), amount, total_supply);
}

pub(crate) fn transferred(env: &Env, from: &Address, to: &Address, amount: i128) {
    let topics = (symbol_short!("transfer"), from.clone(), to.clone());
    env.events().publish(topics, amount);
    log!(env, "transfer", from.clone(), to.clone(), amount);
}

pub(crate) fn approved(env: &Env, owner: &Address, spender: &Address, allowance: i128) {
    let topics = (symbol_short!("approve"), owner.clone(), spender.clone());
    env.events().publish(topics, allowance);
    log!(env, "approve", owner.clone(), spender.clone(), allowance);
}

pub(crate) fn transferred_from(
    env: &Env,
    spender: &Address,
    owner: &Address,
    to: &Address,
    amount: i128,
) {
    let topics = (symbol_short!("xfer_from"), owner.clone(), to.clone());
    env.events().publish(topics, amount);
    log!(env, "transfer_from", spender.clone(), owner.clone(), to.clone(), amount);
}

pub(crate) fn burned(env: &Env, admin: &Address, amount: i128, total_supply: i128) {
    let topics = (symbol_short!("burn"), admin.clone());
    env.events().publish(topics, amount);
    log!(env, "burned", admin.clone(), amount, total_supply);
}
