//! Which expenses a signed-in user may see
//!
//! Admins see everything, managers see their own submissions plus the ones
//! routed to them for approval, employees see only their own.

use crate::model::{Expense, Role, User};

pub fn is_visible_to(user: &User, expense: &Expense) -> bool {
    // Generated records carry no owner
    let Some(owner) = expense.user_id else {
        return true;
    };

    match user.role {
        Role::Admin => true,
        Role::Manager => owner == user.id || expense.manager_id == Some(user.id),
        Role::Employee => owner == user.id,
    }
}

pub fn visible_expenses(user: &User, expenses: Vec<Expense>) -> Vec<Expense> {
    expenses.into_iter().filter(|e| is_visible_to(user, e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExpenseStatus;
    use chrono::Utc;

    fn user(id: i64, role: Role) -> User {
        User {
            id,
            email: format!("user{id}@acme.com"),
            full_name: None,
            role,
            company_id: 1,
            manager_id: None,
        }
    }

    fn owned(id: i64, owner: Option<i64>, manager: Option<i64>) -> Expense {
        let mut expense = Expense::new(id, "Hotel", 200.0, "Travel", ExpenseStatus::Pending, 1, Utc::now());
        expense.user_id = owner;
        expense.manager_id = manager;
        expense
    }

    #[test]
    fn test_admin_sees_everything() {
        let admin = user(1, Role::Admin);
        assert!(is_visible_to(&admin, &owned(1, Some(9), None)));
    }

    #[test]
    fn test_manager_sees_own_and_managed() {
        let manager = user(2, Role::Manager);

        assert!(is_visible_to(&manager, &owned(1, Some(2), None)));
        assert!(is_visible_to(&manager, &owned(2, Some(5), Some(2))));
        assert!(!is_visible_to(&manager, &owned(3, Some(5), Some(7))));
    }

    #[test]
    fn test_employee_sees_only_own() {
        let employee = user(3, Role::Employee);
        let expenses = vec![owned(1, Some(3), Some(2)), owned(2, Some(4), Some(3)), owned(3, None, None)];

        let ids: Vec<i64> = visible_expenses(&employee, expenses).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
