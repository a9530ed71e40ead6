//! Entity construction from raw form input
//!
//! Each form carries every field as the text the user typed. `parse` either
//! returns a fully validated entity or a `PaycheckError::Validation` naming
//! the offending field. Nothing here touches storage.

use crate::dates::parse_date;
use crate::error::{PaycheckError, PaycheckResult};
use crate::models::{Account, AccountType, Bill, BillCategory, BillStatus, Expense, Income, Money};

fn required<'a>(field: &str, value: &'a str) -> PaycheckResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PaycheckError::invalid_field(field, "value is required"));
    }
    Ok(value)
}

fn amount(field: &str, value: &str) -> PaycheckResult<Money> {
    Money::parse(value).map_err(|e| PaycheckError::invalid_field(field, e))
}

fn non_negative_amount(field: &str, value: &str) -> PaycheckResult<Money> {
    let money = amount(field, value)?;
    if money.is_negative() {
        return Err(PaycheckError::invalid_field(field, "amount cannot be negative"));
    }
    Ok(money)
}

fn choice<T>(field: &str, value: &str) -> PaycheckResult<T>
where
    T: std::str::FromStr<Err = String>,
{
    required(field, value)?
        .parse()
        .map_err(|e: String| PaycheckError::invalid_field(field, e))
}

#[derive(Debug, Clone, Default)]
pub struct AccountForm {
    pub name: String,
    pub account_type: String,
    pub balance: String,
}

impl AccountForm {
    /// Balance may be negative (credit accounts)
    pub fn parse(&self) -> PaycheckResult<Account> {
        let name = required("name", &self.name)?;
        let account_type: AccountType = choice("type", &self.account_type)?;
        let balance = amount("balance", &self.balance)?;

        let account = Account::new(name, account_type, balance);
        account
            .validate()
            .map_err(|e| PaycheckError::Validation(e.to_string()))?;
        Ok(account)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BillForm {
    pub name: String,
    pub amount_this_month: String,
    pub amount_next_month: String,
    pub due_date: String,
    pub category: String,
    pub status: String,
    pub bank_account: String,
}

impl BillForm {
    pub fn parse(&self) -> PaycheckResult<Bill> {
        let name = required("name", &self.name)?;
        let this_month = non_negative_amount("amount_this_month", &self.amount_this_month)?;
        let next_month = non_negative_amount("amount_next_month", &self.amount_next_month)?;
        let due_date = parse_date("due_date", &self.due_date)?;
        let category: BillCategory = choice("category", &self.category)?;
        let status: BillStatus = choice("status", &self.status)?;
        let bank_account = required("bank_account", &self.bank_account)?;

        let bill = Bill::new(
            name,
            this_month,
            next_month,
            due_date,
            category,
            status,
            bank_account,
        );
        bill.validate()
            .map_err(|e| PaycheckError::Validation(e.to_string()))?;
        Ok(bill)
    }
}

#[derive(Debug, Clone, Default)]
pub struct IncomeForm {
    pub name: String,
    pub amount_this_month: String,
    pub amount_next_month: String,
    pub due_date: String,
    pub bank_account: String,
}

impl IncomeForm {
    pub fn parse(&self) -> PaycheckResult<Income> {
        let name = required("name", &self.name)?;
        let this_month = non_negative_amount("amount_this_month", &self.amount_this_month)?;
        let next_month = non_negative_amount("amount_next_month", &self.amount_next_month)?;
        let due_date = parse_date("due_date", &self.due_date)?;
        let bank_account = required("bank_account", &self.bank_account)?;

        let income = Income::new(name, this_month, next_month, due_date, bank_account);
        income
            .validate()
            .map_err(|e| PaycheckError::Validation(e.to_string()))?;
        Ok(income)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub name: String,
    pub bank_account: String,
    pub amount: String,
    pub date: String,
}

impl ExpenseForm {
    pub fn parse(&self) -> PaycheckResult<Expense> {
        let name = required("name", &self.name)?;
        let bank_account = required("bank_account", &self.bank_account)?;
        let amount = non_negative_amount("amount", &self.amount)?;
        let date = parse_date("date", &self.date)?;

        let expense = Expense::new(name, bank_account, amount, date);
        expense
            .validate()
            .map_err(|e| PaycheckError::Validation(e.to_string()))?;
        Ok(expense)
    }
}
